use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Cursor;

use fundscope_lib::types::FinancialRecord;
use fundscope_lib::{BatchSummary, CandidateReport};

/// Child element name for array fields.
fn singular(field: &str) -> &str {
    match field {
        "labels" => "label",
        "candidates" => "candidate",
        _ => field,
    }
}

fn write_text<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Recursively write a serde_json::Value as XML elements. Nulls are omitted.
fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &serde_json::Value,
) -> Result<(), quick_xml::Error> {
    match value {
        serde_json::Value::Null => {}
        serde_json::Value::Bool(b) => write_text(writer, tag, if *b { "true" } else { "false" })?,
        serde_json::Value::Number(n) => write_text(writer, tag, &n.to_string())?,
        serde_json::Value::String(s) => write_text(writer, tag, s)?,
        serde_json::Value::Array(arr) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            let child_tag = singular(tag);
            for item in arr {
                write_value(writer, child_tag, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        serde_json::Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for (key, val) in map {
                write_value(writer, key, val)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
    }
    Ok(())
}

fn new_document() -> Result<Writer<Cursor<Vec<u8>>>> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(writer)
}

fn finish(writer: Writer<Cursor<Vec<u8>>>) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Serialize a slice of items under `root_tag`, one `item_tag` element each.
fn items_to_xml<T: Serialize>(root_tag: &str, item_tag: &str, items: &[T]) -> Result<String> {
    let mut writer = new_document()?;
    if items.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(root_tag)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(root_tag)))?;
        for item in items {
            write_value(&mut writer, item_tag, &serde_json::to_value(item)?)?;
        }
        writer.write_event(Event::End(BytesEnd::new(root_tag)))?;
    }
    finish(writer)
}

/// Serialize a single document rooted at `root_tag`.
fn document_to_xml<T: Serialize>(root_tag: &str, item: &T) -> Result<String> {
    let mut writer = new_document()?;
    write_value(&mut writer, root_tag, &serde_json::to_value(item)?)?;
    finish(writer)
}

pub fn records_to_xml(records: &[&FinancialRecord]) -> Result<String> {
    items_to_xml("candidates", "candidate", records)
}

pub fn report_to_xml(report: &CandidateReport) -> Result<String> {
    document_to_xml("analysis", report)
}

pub fn summary_to_xml(summary: &BatchSummary) -> Result<String> {
    document_to_xml("summary", summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundscope_lib::{parse_all_records, summarize, ClassificationThresholds};

    fn load_fixture() -> Vec<FinancialRecord> {
        parse_all_records(include_str!(
            "../../fec_weball/tests/fixtures/weball_sample.txt"
        ))
    }

    fn assert_xml_parseable(xml: &str) {
        use quick_xml::Reader;

        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("XML parse error at {}: {e}", reader.buffer_position()),
            }
        }
    }

    #[test]
    fn test_records_xml_wellformed() {
        let records = load_fixture();
        let refs: Vec<&FinancialRecord> = records.iter().take(2).collect();
        let xml = records_to_xml(&refs).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<candidates>"));
        assert!(xml.contains("<candidate>"));
        assert!(xml.contains("<candidateId>H0CA12001</candidateId>"));
        assert!(xml.contains("<office>house</office>"));
        assert!(xml.contains("<coverageEnd>2024-12-31</coverageEnd>"));
        assert_xml_parseable(&xml);
    }

    #[test]
    fn test_null_dates_omitted() {
        let records = load_fixture();
        let refs: Vec<&FinancialRecord> = records.iter().take(1).collect();
        let xml = records_to_xml(&refs).unwrap();
        assert!(!xml.contains("<coverageStart>"));
    }

    #[test]
    fn test_empty_list_produces_self_closing_root() {
        let xml = records_to_xml(&[]).unwrap();
        assert!(xml.contains("<candidates/>"));
        assert!(!xml.contains("</candidates>"));
    }

    #[test]
    fn test_report_xml_nests_sections() {
        let records = load_fixture();
        let report = CandidateReport::build(&records[2], &ClassificationThresholds::default());
        let xml = report_to_xml(&report).unwrap();
        assert!(xml.contains("<analysis>"));
        assert!(xml.contains("<transfers>"));
        assert!(xml.contains("<hasDoubleCountingIssue>true</hasDoubleCountingIssue>"));
        assert!(xml.contains("<primaryFundingSource>individual</primaryFundingSource>"));
        assert!(xml.contains("<label>grassroots support</label>"));
        assert_xml_parseable(&xml);
    }

    #[test]
    fn test_summary_xml_groups() {
        let summary = summarize(&load_fixture());
        let xml = summary_to_xml(&summary).unwrap();
        assert!(xml.contains("<byParty>"));
        assert!(xml.contains("<democrat>"));
        assert!(xml.contains("<byOffice>"));
        assert!(xml.contains("<senate>"));
        assert_xml_parseable(&xml);
    }

    #[test]
    fn test_xml_special_chars_escaped() {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        write_value(
            &mut writer,
            "candidateName",
            &serde_json::Value::String("O'NEIL & SONS <PAC>".to_string()),
        )
        .unwrap();
        let xml = String::from_utf8(writer.into_inner().into_inner()).unwrap();
        assert!(xml.contains("&amp;"));
        assert!(xml.contains("&lt;"));
        assert!(!xml.contains("SONS <PAC>"));
    }
}
