use std::fs;
use std::path::Path;

use lookup_resolver::lookup::{LocalFilesystem, MemoryFilesystem, RowReader};
use lookup_resolver::{
    BinOp, Column, LookupResolver, LookupSource, Resolution, ResolveError, Resolver, Source, Value,
};

fn products() -> MemoryFilesystem {
    MemoryFilesystem::new().with_file(
        "products.tsv",
        "product\tcategory\tprice\nLaptop\tElectronics\t999.99\nDesk\tFurniture\t249.50\n",
    )
}

fn users() -> LookupResolver {
    LookupResolver::new(MemoryFilesystem::new().with_file(
        "users.csv",
        "name,age,city,salary\nAlice,30,NYC,75000\nBob,25,LA,65000\nCharlie,28,NYC,85000\n",
    ))
}

/// Children are literals only.
struct Literals;

impl Resolver for Literals {
    fn resolve(&self, source: &Source) -> Resolution {
        match source {
            Source::Static { value } if !value.is_null() => Ok(Some(value.clone())),
            _ => Ok(None),
        }
    }
}

// Row streaming

#[test]
fn test_streams_records_with_shared_header() {
    let rows = RowReader::open(&products(), Path::new("products.tsv"), '\t', true).unwrap();
    assert_eq!(
        rows.header(),
        Some(&["product".to_string(), "category".to_string(), "price".to_string()][..])
    );

    let records = rows.collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].get(&"price".into()), Some("249.50"));
}

#[test]
fn test_headerless_rows_are_positional() {
    let fs = MemoryFilesystem::new().with_file("ids.csv", "1,Alice\n2,Bob\n");
    let rows = RowReader::open(&fs, Path::new("ids.csv"), ',', false).unwrap();
    assert!(rows.header().is_none());
    let names = rows
        .map(|r| r.unwrap().value(&Column::Index(1)))
        .collect::<Vec<_>>();
    assert_eq!(names, vec![Value::from("Alice"), Value::from("Bob")]);
}

#[test]
fn test_quoted_fields_keep_delimiters() {
    let fs = MemoryFilesystem::new()
        .with_file("q.csv", "name,note\n\"Smith, J\",\"said \"\"hi\"\"\"\n");
    let mut rows = RowReader::open(&fs, Path::new("q.csv"), ',', true).unwrap();
    let record = rows.next().unwrap().unwrap();
    assert_eq!(record.get(&"name".into()), Some("Smith, J"));
    assert_eq!(record.get(&"note".into()), Some("said \"hi\""));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = RowReader::open(&products(), Path::new("nope.csv"), ',', true)
        .err()
        .unwrap();
    assert!(matches!(err, ResolveError::Io { .. }));
    assert!(err.to_string().starts_with("Unable to read file nope.csv"), "{err}");
}

#[test]
fn test_multibyte_delimiter_is_rejected() {
    let err = RowReader::open(&products(), Path::new("products.tsv"), '→', true)
        .err()
        .unwrap();
    assert!(matches!(err, ResolveError::InvalidLookup(_)));
}

#[test]
fn test_rooted_filesystem_resolves_relative_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bands.csv"), "min,max\n0,10\n").unwrap();
    let fs = LocalFilesystem::rooted(dir.path());
    let rows = RowReader::open(&fs, Path::new("bands.csv"), ',', true).unwrap();
    assert_eq!(rows.count(), 1);
}

// Lookup resolver over an in-memory filesystem

#[test]
fn test_counts_matching_rows() {
    let lookup = LookupSource::new("users.csv")
        .where_eq("city", Source::literal("NYC"))
        .aggregate("count");
    assert_eq!(users().lookup(&lookup, &Literals).unwrap(), Some(Value::Integer(2)));
}

#[test]
fn test_configuration_errors_come_before_the_file() {
    let unknown = LookupSource::new("missing.csv").aggregate("median");
    assert!(matches!(
        users().lookup(&unknown, &Literals),
        Err(ResolveError::UnknownAggregate(_))
    ));

    let sum = LookupSource::new("missing.csv").aggregate("sum");
    assert!(matches!(
        users().lookup(&sum, &Literals),
        Err(ResolveError::MissingAggregateColumn("sum"))
    ));
}

#[test]
fn test_unresolvable_filter_value_skips_the_file() {
    let lookup = LookupSource::new("missing.csv").where_eq("name", Source::symbol("nobody"));
    assert_eq!(users().lookup(&lookup, &Literals).unwrap(), None);
}

#[test]
fn test_filters_apply_in_order() {
    let lookup = LookupSource::new("users.csv")
        .where_eq("city", Source::literal("NYC"))
        .where_op("age", BinOp::LessThan, Source::literal(29i64))
        .columns(["name"]);
    assert_eq!(
        users().lookup(&lookup, &Literals).unwrap(),
        Some(Value::from("Charlie"))
    );
}

#[test]
fn test_missing_single_column_is_no_value() {
    let lookup = LookupSource::new("users.csv").columns(["email"]);
    assert_eq!(users().lookup(&lookup, &Literals).unwrap(), None);
}
