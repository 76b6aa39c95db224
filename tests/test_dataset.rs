use std::io::Write;

use postag::{CrfSuiteWriter, Dataset, Document, Mode, PosAnnotator, Trainable};

fn document() -> Document {
    let mut doc = Document::new("writer");
    doc.push_tagged(&[("It", "PRP"), ("costs", "VBZ"), ("10:30", "CD")]);
    doc.push_tagged(&[("C:\\dir", "NN")]);
    doc
}

#[test]
fn crfsuite_data_reads_back_as_dataset() {
    let mut writer = CrfSuiteWriter::new(Vec::new());
    let mut interned = Dataset::default();
    {
        let mut annotator = PosAnnotator::new(Mode::Training(&mut writer));
        annotator.process(&mut document()).unwrap();
        annotator.finish().unwrap();
    }
    {
        let mut annotator = PosAnnotator::new(Mode::Training(&mut interned));
        annotator.process(&mut document()).unwrap();
    }
    assert_eq!(writer.sequences(), 2);
    assert_eq!(writer.items(), 4);

    let data = writer.into_inner();
    let text = String::from_utf8(data.clone()).unwrap();
    assert!(text.starts_with("PRP\ttext=It\tlower=it\t"));
    assert!(text.contains("text=10\\:30"));
    assert!(text.contains("text=C\\:\\\\dir"));
    assert!(text.ends_with("\n\n"));

    let read = Dataset::read(data.as_slice()).unwrap();
    assert_eq!(read.len(), interned.len());
    assert_eq!(read.num_labels(), interned.num_labels());
    assert_eq!(read.num_attrs(), interned.num_attrs());
    assert_eq!(read.sequences(), interned.sequences());
    assert_eq!(read.attrs().id("text=10:30"), interned.attrs().id("text=10:30"));
    assert_eq!(read.label(0), Some("PRP"));
}

#[test]
fn tabs_and_line_breaks_in_tokens() {
    let mut doc = Document::new("whitespace");
    doc.push_tagged(&[("a\tb", "SYM"), ("line\nbreak", "NN")]);
    let mut writer = CrfSuiteWriter::new(Vec::new());
    let mut interned = Dataset::default();
    PosAnnotator::new(Mode::Training(&mut writer)).process(&mut doc.clone()).unwrap();
    PosAnnotator::new(Mode::Training(&mut interned)).process(&mut doc).unwrap();
    assert_eq!((writer.sequences(), writer.items()), (1, 2));

    let read = Dataset::read(writer.into_inner().as_slice()).unwrap();
    assert_eq!(read.len(), 1);
    assert_eq!(read.total_items(), 2);
    assert_eq!(read.sequences(), interned.sequences());
    assert_eq!(read.attrs().id("text=a\tb"), Some(0));
    assert_eq!(read.attrs().id("text=line\nbreak"), interned.attrs().id("text=line\nbreak"));
}

#[test]
fn dataset_from_file() {
    let path = std::env::temp_dir().join(format!("postag-{}.data", std::process::id()));
    {
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"DT\ttext=the\nNN\ttext=dog\n\n").unwrap();
    }
    let ds = Dataset::try_from(std::fs::File::open(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.total_items(), 2);
    assert_eq!(ds.labels().len(), 2);
}

#[test]
fn writer_skips_empty_instances() {
    let mut writer = CrfSuiteWriter::new(Vec::new());
    writer.train_on(Default::default()).unwrap();
    writer.finish().unwrap();
    assert!(writer.into_inner().is_empty());
}
