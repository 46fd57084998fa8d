
use crate::comparison::{run_comparison, PaneContent};
use crate::config::{CompareConfig, DiffAlgorithm};
use crate::differ::{compare, compare_with, EditOp, Side};
use crate::renderer::{render, Highlight};
use file_generator::FileGenerator;
use file_modifier::FileModifier;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn panes_stay_the_same_length_for_random_inputs() {
    let mut generator = FileGenerator::new(0x5eed);
    for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
        let config = CompareConfig {
            algorithm,
            ..CompareConfig::default()
        };
        for _ in 0..200 {
            let left = generator.random_lines(20, 8);
            let right = if generator.coin() {
                generator.mutate(&left)
            } else {
                generator.random_lines(20, 8)
            };
            let ops = compare_with(&left, &right, &config);
            let panes = render(&ops);
            assert_eq!(panes.left.len(), panes.right.len());
            assert_eq!(panes.len(), ops.len());

            // Numbered rows reproduce each input in order.
            for (side, source) in [(Side::Left, &left), (Side::Right, &right)] {
                let texts: Vec<&String> = panes
                    .rows(side)
                    .iter()
                    .filter(|row| row.line_number.is_some())
                    .map(|row| &row.text)
                    .collect();
                assert_eq!(texts, source.iter().collect::<Vec<_>>());
            }
        }
    }
}

#[test]
fn hints_only_follow_their_changed_line() {
    let mut generator = FileGenerator::new(42);
    for _ in 0..200 {
        let left = generator.random_lines(15, 10);
        let right = generator.mutate(&left);
        let ops = compare(&left, &right);
        for (i, op) in ops.iter().enumerate() {
            if let EditOp::Hint { side, .. } = op {
                let previous = i.checked_sub(1).map(|p| &ops[p]);
                match side {
                    Side::Left => assert!(matches!(previous, Some(EditOp::DeleteLeft(_)))),
                    Side::Right => assert!(matches!(previous, Some(EditOp::InsertRight(_)))),
                }
            }
        }
    }
}

#[test]
fn comparing_twice_gives_the_same_rows() {
    let mut generator = FileGenerator::new(7);
    let left = generator.random_lines(30, 10);
    let right = generator.mutate(&left);
    let first = compare(&left, &right);
    let second = compare(&left, &right);
    assert_eq!(first, second);
    assert_eq!(render(&first), render(&second));
}

#[test]
fn empty_left_pads_every_row() {
    let right = lines(&["one\n", "two\n", "three\n"]);
    let panes = render(&compare(&[], &right));
    assert_eq!(panes.left.len(), 3);
    assert_eq!(panes.right.len(), 3);
    assert!(panes.left.iter().all(|row| row.is_padding() && row.line_number.is_none()));
    for (i, row) in panes.right.iter().enumerate() {
        assert_eq!(row.highlight, Highlight::Inserted);
        assert_eq!(row.line_number, Some(i + 1));
    }
}

#[test]
fn one_changed_line_scenario() {
    let panes = render(&compare(
        &lines(&["a\n", "b\n", "c\n"]),
        &lines(&["a\n", "x\n", "c\n"]),
    ));
    let left: Vec<Highlight> = panes.left.iter().map(|row| row.highlight).collect();
    let right: Vec<Highlight> = panes.right.iter().map(|row| row.highlight).collect();
    assert_eq!(
        left,
        vec![Highlight::None, Highlight::Deleted, Highlight::BlankPad, Highlight::None]
    );
    assert_eq!(
        right,
        vec![Highlight::None, Highlight::BlankPad, Highlight::Inserted, Highlight::None]
    );
}

#[test]
fn modified_files_render_hints_under_the_edit() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.txt");
    let modified = dir.path().join("modified.txt");
    let content: Vec<String> = (1..=6)
        .map(|i| format!("id_{i:03},data,value_{i}\n"))
        .collect();
    FileGenerator::write_lines(&base, &content);
    FileGenerator::write_lines(&modified, &content);

    let modifier = FileModifier::new(&modified);
    modifier.replace_line(3, "id_003,data,value_MODIFIED").unwrap();
    modifier.delete_line(5).unwrap();
    modifier.add_line_after(1, "inserted").unwrap();

    let comparison = run_comparison(&base, &modified, &CompareConfig::default());
    let (PaneContent::Rows(left), PaneContent::Rows(right)) = (&comparison.left, &comparison.right)
    else {
        panic!("both files should load");
    };
    assert_eq!(left.len(), right.len());

    let edited = left
        .iter()
        .position(|row| row.text == "id_003,data,value_3\n")
        .unwrap();
    assert_eq!(left[edited].highlight, Highlight::Deleted);
    assert_eq!(left[edited].line_number, Some(3));
    assert_eq!(left[edited + 1].highlight, Highlight::Hint);
    assert!(right[edited + 1].is_padding());

    let stats = comparison.stats.unwrap();
    assert_eq!(stats.inserted, 2);
    assert_eq!(stats.deleted, 2);
    assert_eq!(stats.equal, 4);
}
