//! Integration tests for the catalog loader

use edupath::core::loader::load_catalog_csv;
use edupath::core::models::CourseId;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str =
    "course_id,course_title,category,prerequisite_ids,est_hours,course_difficulty,course_rating,course_organization";

/// Write a dataset CSV into a temp dir and return its path
fn write_dataset(rows: &[&str]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("courses.csv");
    let mut file = fs::File::create(&path).expect("create dataset");
    writeln!(file, "{HEADER}").expect("write header");
    for row in rows {
        writeln!(file, "{row}").expect("write row");
    }
    (dir, path)
}

#[test]
fn loads_well_formed_rows() {
    let (_dir, path) = write_dataset(&[
        "1001,Intro to Python,Programming,[],40,Beginner,4.5,Coursera",
        r#"1002,Data Structures,Programming,"[1001]",35,Intermediate,4.2,edX"#,
    ]);

    let catalog = load_catalog_csv(&path).expect("load succeeds");

    assert_eq!(catalog.len(), 2);
    let ds = catalog.lookup(1002).expect("course exists");
    assert_eq!(ds.prerequisite_ids, vec![1001]);
    assert_eq!(ds.difficulty.to_string(), "Intermediate");
    assert_eq!(ds.organization, "edX");
}

#[test]
fn malformed_prerequisites_degrade_to_empty() {
    let (_dir, path) = write_dataset(&[
        "1001,Intro,Programming,not-a-list,40,Beginner,4.5,Coursera",
        r#"1002,Broken Brackets,Programming,"[1001",35,Beginner,4.0,edX"#,
    ]);

    let catalog = load_catalog_csv(&path).expect("bad cells never abort the load");

    assert_eq!(catalog.len(), 2);
    assert!(catalog.lookup(1001).unwrap().prerequisite_ids.is_empty());
    assert!(catalog.lookup(1002).unwrap().prerequisite_ids.is_empty());
}

#[test]
fn duplicate_ids_keep_first_row() {
    let (_dir, path) = write_dataset(&[
        "1001,First Version,Programming,[],40,Beginner,4.5,Coursera",
        "1001,Second Version,Programming,[],10,Beginner,3.0,edX",
    ]);

    let catalog = load_catalog_csv(&path).expect("load succeeds");

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.lookup(1001).unwrap().title, "First Version");
}

#[test]
fn rows_missing_title_or_category_are_dropped() {
    let (_dir, path) = write_dataset(&[
        "1001,,Programming,[],40,Beginner,4.5,Coursera",
        "1002,Good Course,,[],30,Beginner,4.0,edX",
        "1003,Kept Course,Programming,[],20,Beginner,4.1,edX",
    ]);

    let catalog = load_catalog_csv(&path).expect("load succeeds");

    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains(1003));
}

#[test]
fn unparsable_ids_and_numerics_are_tolerated() {
    let (_dir, path) = write_dataset(&[
        "abc,Bad Id,Programming,[],40,Beginner,4.5,Coursera",
        "1002,Zeroed Numbers,Programming,[],oops,Beginner,n/a,edX",
    ]);

    let catalog = load_catalog_csv(&path).expect("load succeeds");

    assert_eq!(catalog.len(), 1);
    let course = catalog.lookup(1002).expect("course exists");
    assert!((course.estimated_hours - 0.0).abs() < f32::EPSILON);
    assert!((course.rating - 0.0).abs() < f32::EPSILON);
}

#[test]
fn output_is_sorted_regardless_of_input_order() {
    let (_dir, path) = write_dataset(&[
        "1005,E,Programming,[],1,Beginner,1.0,X",
        "1001,A,Programming,[],1,Beginner,1.0,X",
        "1003,C,Programming,[],1,Beginner,1.0,X",
    ]);

    let catalog = load_catalog_csv(&path).expect("load succeeds");

    let ids: Vec<CourseId> = catalog.ordered_by_id().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1001, 1003, 1005]);
}

#[test]
fn unknown_prerequisite_ids_are_preserved_for_the_engine() {
    // The loader tolerates references to ids outside the dataset; the path
    // engine drops them during traversal.
    let (_dir, path) = write_dataset(&[r#"1001,Solo,Programming,"[42, 43]",10,Beginner,4.0,X"#]);

    let catalog = load_catalog_csv(&path).expect("load succeeds");
    assert_eq!(catalog.lookup(1001).unwrap().prerequisite_ids, vec![42, 43]);
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let missing = dir.path().join("nope.csv");
    assert!(load_catalog_csv(&missing).is_err());
}

#[test]
fn empty_file_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").expect("write empty file");
    assert!(load_catalog_csv(&path).is_err());
}

#[test]
fn missing_course_id_column_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("wrong.csv");
    fs::write(&path, "id,name\n1,x\n").expect("write file");
    assert!(load_catalog_csv(&path).is_err());
}
