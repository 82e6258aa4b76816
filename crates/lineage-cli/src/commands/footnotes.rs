//! Footnotes command implementation.

use crate::cli::{FootnotesArgs, PlacementArg};
use crate::commands::{bare_xref, open_records};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{FactFootnotes, Formatter};
use lineage_citation::{CitationConfig, CitationFormatter, FootnoteEntry, Footnotes, PagePlacement};
use lineage_domain::{Record, SourceLookup};

/// Execute the footnotes command.
pub fn execute_footnotes(args: FootnotesArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let records = open_records(&args.file, args.db.as_deref())?;
    let xref = bare_xref(&args.xref);
    let record = records
        .lookup_source(xref)
        .ok_or_else(|| CliError::NotFound(xref.to_string()))?;

    let mut citation = config.citation.clone();
    if let Some(placement) = args.placement {
        citation.page_placement = match placement {
            PlacementArg::Trailing => PagePlacement::Trailing,
            PlacementArg::AfterFirstFact => PagePlacement::AfterFirstFact,
        };
    }

    let (facts, footnotes) = number_citations(&record, citation, records.as_ref());
    println!("{}", formatter.format_footnotes(xref, &facts, &footnotes)?);
    Ok(())
}

/// Intern the citations of every fact of `record`, in storage order.
pub fn number_citations(
    record: &Record,
    citation: CitationConfig,
    lookup: &dyn SourceLookup,
) -> (Vec<FactFootnotes>, Vec<FootnoteEntry>) {
    let mut footnotes = Footnotes::new(CitationFormatter::new(citation));

    let facts = record
        .facts
        .iter()
        .map(|fact| FactFootnotes {
            tag: fact.tag.clone(),
            footnotes: footnotes.cite_fact(fact, lookup),
        })
        .collect();

    (facts, footnotes.registry().entries().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_store::MemoryStore;

    const FILE: &str = "\
0 @I1@ INDI
1 NAME John /Smith/
1 BIRT
2 SOUR @S1@
3 PAGE 45
4 TEXT Baptism entry
1 DEAT
2 SOUR @S1@
3 PAGE 45
4 TEXT Baptism entry
1 SOUR @S1@
0 @S1@ SOUR
1 AUTH Smith, J.
1 TITL Parish Records
1 PUBL County Archive
";

    #[test]
    fn test_number_citations() {
        let store = MemoryStore::from_gedcom(FILE);
        let record = store.lookup_source("I1").unwrap();

        let (facts, footnotes) = number_citations(&record, CitationConfig::plain(), &store);

        let indices: Vec<Vec<usize>> = facts.iter().map(|f| f.footnotes.clone()).collect();
        assert_eq!(indices, vec![vec![], vec![1], vec![1], vec![2]]);
        assert_eq!(
            footnotes[0].text,
            "Smith, J., Parish Records (County Archive): 45 Baptism entry"
        );
        assert_eq!(footnotes[1].text, "Smith, J., Parish Records (County Archive)");
    }

    #[test]
    fn test_after_first_fact_placement() {
        let store = MemoryStore::from_gedcom(FILE);
        let record = store.lookup_source("I1").unwrap();
        let config = CitationConfig {
            page_placement: PagePlacement::AfterFirstFact,
            ..CitationConfig::plain()
        };

        let (_, footnotes) = number_citations(&record, config, &store);
        assert_eq!(
            footnotes[0].text,
            "Smith, J., : 45 Baptism entryParish Records (County Archive)"
        );
    }
}
