use sentinel_list::{Cursor, List};
use std::iter::FromIterator;

const DATA: [i32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

fn sentence() -> List<String> {
    ["the", "quick", "brown", "fox", "jumped", "over", "the", "lazy", "dog"]
        .iter()
        .map(|word| word.to_string())
        .collect()
}

#[test]
fn mutable_begin_and_dereference() {
    let mut list = List::from_iter(DATA);
    let first = list.begin().current().copied();
    let mut cursor = list.begin_mut();
    assert_eq!(cursor.current().copied(), first);
    assert!(cursor.as_cursor() == cursor.view().begin());
    assert_eq!(cursor.current_mut(), Some(&mut 0));
}

#[test]
fn mutable_increment_decrement() {
    let mut list = List::from_iter(DATA);
    let mut cursor = list.begin_mut();

    cursor.move_next();
    assert!(cursor.as_cursor() != cursor.view().begin());
    cursor.move_prev();
    assert!(cursor.as_cursor() == cursor.view().begin());

    // stepping back from the first element lands on the ghost node
    cursor.move_prev();
    assert!(cursor.is_end());
    assert_eq!(cursor.current(), None);
}

#[test]
fn counts_up_to_end() {
    let list = List::from_iter(DATA);

    let mut count = 0;
    let mut cursor = list.begin();
    while cursor != list.end() {
        count += 1;
        cursor.move_next();
    }
    assert_eq!(count, DATA.len());

    let mut list = list;
    let mut count = 0;
    let mut cursor = list.begin_mut();
    while !cursor.is_end() {
        count += 1;
        cursor.move_next();
    }
    assert_eq!(count, DATA.len());
}

#[test]
fn arrows_through_both_cursors() {
    let lengths = [3, 5, 5, 3, 6, 4, 3, 4, 3];

    let list = sentence();
    let mut index = 0;
    let mut cursor = list.begin();
    while cursor != list.end() {
        assert_eq!(cursor.current().map(String::len), Some(lengths[index]));
        index += 1;
        cursor.move_next();
    }

    let mut list = sentence();
    let mut index = 0;
    let mut cursor = list.begin_mut();
    while let Some(word) = cursor.current_mut() {
        assert_eq!(word.len(), lengths[index]);
        word.make_ascii_uppercase();
        index += 1;
        cursor.move_next();
    }
    assert_eq!(list.get(3).map(String::as_str), Ok("FOX"));
}

#[test]
fn cursor_and_iterator_agree() {
    let list = sentence();
    let mut cursor: Cursor<'_, String> = list.begin();
    for (i, word) in list.iter().enumerate() {
        assert_eq!(cursor.current(), Some(word));
        assert_eq!(list.get(i), Ok(word));
        cursor.move_next();
    }
    assert!(cursor.is_end());

    // the walk is cyclic
    cursor.move_next();
    assert_eq!(cursor, list.begin());
}

#[test]
fn empty_list_cursors() {
    let mut list = List::<i32>::new();
    assert_eq!(list.begin(), list.end());
    assert_eq!(list.begin().current(), None);

    let mut cursor = list.end_mut();
    cursor.move_next();
    assert!(cursor.is_end());
    assert!(cursor.current_mut().is_none());
    let cursor: Cursor<'_, i32> = cursor.into();
    assert!(cursor.is_end());
}
