use pathsort::prelude::*;
use rand::Rng;
use serde_json::{Value, json};

fn cars() -> Vec<&'static str> {
    vec!["Volvo", "Ford", "BMW", "Mazda"]
}

fn numbers() -> Vec<&'static str> {
    vec!["one", "two", "three", "four", "five", "five"]
}

#[test]
fn test_resolve_nested_path() {
    let v = json!({ "a": [{ "b": [1, 2] }] });
    assert_eq!(resolve(&v, &key_path!["a", 0, "b", 1]).unwrap(), &json!(2));
    assert_eq!(resolve(&v, &KeyPath::Empty).unwrap(), &v);

    let v = json!({ "key0": [{ "key1": [3.142, 6.626] }] });
    assert_eq!(
        resolve(&v, &key_path!["key0", 0, "key1", 0]).unwrap(),
        &json!(3.142)
    );

    let v = json!({ "key0": { "key1": [{ "key2": [3.142, 6.626, "pie"] }] } });
    assert_eq!(
        resolve(&v, &key_path!["key0", "key1", 0, "key2", 2]).unwrap(),
        &json!("pie")
    );
}

#[test]
fn test_resolve_single_step_matches_one_index() {
    let v = json!({ "name": "Tom" });
    assert_eq!(resolve(&v, &KeyPath::from("name")).unwrap(), &v["name"]);
}

#[test]
fn test_resolve_missing_key_is_undefined_projection() {
    let v = json!({ "a": [{ "b": [1, 2] }] });
    let path = key_path!["a", 0, "c"];
    assert_eq!(
        resolve(&v, &path),
        Err(SortError::UndefinedProjection { path: path.clone(), step: 2 })
    );

    let path = key_path!["a", 5];
    assert!(matches!(
        resolve(&v, &path),
        Err(SortError::UndefinedProjection { step: 1, .. })
    ));
}

#[test]
fn test_resolve_through_scalar_is_invalid_argument() {
    let v = json!({ "a": 3 });
    assert!(matches!(
        resolve(&v, &key_path!["a", "b"]),
        Err(SortError::InvalidArgument(_))
    ));
}

#[test]
fn test_bubble_sort_lexic_ascending() {
    let cmp = comparator_lexic(LexicOptions::new().ignore_case(true));

    assert_eq!(
        bubble_sort(&cars(), &cmp, None).unwrap(),
        vec!["BMW", "Ford", "Mazda", "Volvo"]
    );
    assert_eq!(
        bubble_sort(&numbers(), &cmp, None).unwrap(),
        vec!["five", "five", "four", "one", "three", "two"]
    );
}

#[test]
fn test_bubble_sort_lexic_descending() {
    let cmp = comparator_lexic(LexicOptions::new().ignore_case(true).descending(true));

    assert_eq!(
        bubble_sort(&cars(), &cmp, None).unwrap(),
        vec!["Volvo", "Mazda", "Ford", "BMW"]
    );
    assert_eq!(
        bubble_sort(&numbers(), &cmp, None).unwrap(),
        vec!["two", "three", "one", "four", "five", "five"]
    );
}

#[test]
fn test_bubble_sort_numeric() {
    let input = vec![6, 5, 6, 1, 2, 3, 0, 4];

    let ascending = bubble_sort(&input, &comparator_numeric(NumericOptions::new()), None).unwrap();
    assert_eq!(ascending, vec![0, 1, 2, 3, 4, 5, 6, 6]);

    let descending = bubble_sort(
        &input,
        &comparator_numeric(NumericOptions::new().descending(true)),
        None,
    )
    .unwrap();
    assert_eq!(descending, vec![6, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_merge_sort_lexic() {
    let ascending = comparator_lexic(LexicOptions::new());
    assert_eq!(
        merge_sort(&cars(), &ascending).unwrap(),
        vec!["BMW", "Ford", "Mazda", "Volvo"]
    );
    assert_eq!(
        merge_sort(&numbers(), &ascending).unwrap(),
        vec!["five", "five", "four", "one", "three", "two"]
    );

    let descending = comparator_lexic(LexicOptions::new().ignore_case(true).descending(true));
    assert_eq!(
        merge_sort(&cars(), &descending).unwrap(),
        vec!["Volvo", "Mazda", "Ford", "BMW"]
    );
}

#[test]
fn test_merge_sort_numeric() {
    let input = vec![6, 5, 6, 1, 2, 3, 0, 4];

    let ascending = merge_sort(&input, &comparator_numeric(NumericOptions::new())).unwrap();
    assert_eq!(ascending, vec![0, 1, 2, 3, 4, 5, 6, 6]);

    let descending =
        merge_sort(&input, &comparator_numeric(NumericOptions::new().descending(true))).unwrap();
    assert_eq!(descending, vec![6, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_partial_sort_numeric_ascending() {
    let input = vec![6, 5, 6, 1, 2, 3, 0, 4];
    let output = partial_sort(&input, &comparator_numeric(NumericOptions::new()), Some(2)).unwrap();

    assert_eq!(&output[..2], &[0, 1]);
    let mut rest = output[2..].to_vec();
    rest.sort();
    assert_eq!(rest, vec![2, 3, 4, 5, 6, 6]);

    // Exact pass-by-pass result.
    assert_eq!(output, vec![0, 1, 6, 5, 6, 2, 3, 4]);
}

#[test]
fn test_partial_sort_numeric_descending() {
    let input = vec![3, 5, 6, 1, 2, 3, 0, 4];
    let cmp = comparator_numeric(NumericOptions::new().descending(true));

    let output = partial_sort(&input, &cmp, Some(2)).unwrap();
    assert_eq!(output, vec![6, 5, 3, 4, 3, 1, 2, 0]);
}

#[test]
fn test_partial_sort_without_k_sorts_fully() {
    let input = vec![6, 5, 6, 1, 2, 3, 0, 4];
    let cmp = comparator_numeric(NumericOptions::new());
    assert_eq!(
        partial_sort(&input, &cmp, None).unwrap(),
        merge_sort(&input, &cmp).unwrap()
    );
}

#[test]
fn test_stability_case_insensitive_ties() {
    let input = vec!["b", "B", "a", "b", "A"];
    let cmp = comparator_lexic(LexicOptions::new().ignore_case(true));
    let expected = vec!["a", "A", "b", "B", "b"];

    assert_eq!(bubble_sort(&input, &cmp, None).unwrap(), expected);
    assert_eq!(merge_sort(&input, &cmp).unwrap(), expected);
    assert_eq!(sort_copy(&input, &cmp).unwrap(), expected);
}

#[test]
fn test_sort_records_by_path() {
    let records = vec![
        json!({ "id": 1, "stats": { "temps": [-4.5, 10] } }),
        json!({ "id": 2, "stats": { "temps": [2.0, 3] } }),
        json!({ "id": 3, "stats": { "temps": [-1.0, 7] } }),
        json!({ "id": 4, "stats": { "temps": [ 4.5, 1] } }),
    ];
    let ids = |sorted: Vec<Value>| -> Vec<i64> {
        sorted.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    };

    let signed = comparator_numeric(NumericOptions::new().path(key_path!["stats", "temps", 0]));
    assert_eq!(ids(merge_sort(&records, &signed).unwrap()), vec![1, 3, 2, 4]);

    // |-4.5| and |4.5| tie, so record 1 stays ahead of record 4.
    let unsigned = comparator_numeric(
        NumericOptions::new()
            .path(key_path!["stats", "temps", 0])
            .ignore_sign(true),
    );
    assert_eq!(ids(merge_sort(&records, &unsigned).unwrap()), vec![3, 2, 1, 4]);
    assert_eq!(ids(bubble_sort(&records, &unsigned, None).unwrap()), vec![3, 2, 1, 4]);
}

#[test]
fn test_missing_projection_aborts_sort() {
    let records = vec![json!({ "name": "a" }), json!({ "title": "b" })];
    let cmp = comparator_lexic(LexicOptions::new().path("name"));

    assert!(matches!(
        merge_sort(&records, &cmp),
        Err(SortError::UndefinedProjection { step: 0, .. })
    ));
    assert!(bubble_sort(&records, &cmp, None).is_err());
}

#[test]
fn test_nan_is_rejected() {
    let cmp = comparator_numeric(NumericOptions::new());
    let input = vec![1.0, f64::NAN, 0.5];

    assert!(matches!(
        merge_sort(&input, &cmp),
        Err(SortError::InvalidArgument(_))
    ));
}

#[test]
fn test_reversed_comparator_round_trip() {
    let input = vec![6, 5, 6, 1, 2, 3, 0, 4];
    let ascending = comparator_numeric(NumericOptions::new());

    let sorted = merge_sort(&input, &ascending).unwrap();
    let reversed = merge_sort(&sorted, &Reversed(ascending)).unwrap();

    let mut expected = sorted.clone();
    expected.reverse();
    assert_eq!(reversed, expected);
}

#[test]
fn test_fuzz_random_numeric() {
    let mut rng = rand::rng();
    let input: Vec<i64> = (0..5_000).map(|_| rng.random_range(-1_000..1_000)).collect();
    let cmp = comparator_numeric(NumericOptions::new());

    let mut expected = input.clone();
    expected.sort();

    assert_eq!(merge_sort(&input, &cmp).unwrap(), expected);
    assert_eq!(sort_copy(&input, &cmp).unwrap(), expected);
    assert_eq!(bubble_sort(&input[..500], &cmp, None).unwrap(), {
        let mut head = input[..500].to_vec();
        head.sort();
        head
    });
}

#[test]
fn test_fuzz_random_lexic() {
    let mut rng = rand::rng();
    let input: Vec<String> = (0..2_000)
        .map(|_| {
            let len = rng.random_range(0..8);
            (0..len).map(|_| rng.random_range(b'A'..=b'z') as char).collect()
        })
        .collect();
    let cmp = comparator_lexic(LexicOptions::new().ignore_case(true));

    let mut expected = input.clone();
    expected.sort_by_key(|s| s.to_uppercase());

    assert_eq!(merge_sort(&input, &cmp).unwrap(), expected);
}

#[test]
fn test_sort_copy_returns_error_on_nan() {
    let input: Vec<f64> = (0..50)
        .map(|i| if i % 7 == 3 { f64::NAN } else { (50 - i) as f64 })
        .collect();
    let cmp = comparator_numeric(NumericOptions::new());

    assert!(matches!(
        sort_copy(&input, &cmp),
        Err(SortError::InvalidArgument(_))
    ));
}

#[test]
fn test_sort_copy_returns_error_on_non_numeric_value() {
    let input: Vec<Value> = (0..50)
        .map(|i| if i % 5 == 0 { json!("x") } else { json!(50 - i) })
        .collect();
    let cmp = comparator_numeric(NumericOptions::new());

    assert!(matches!(
        sort_copy(&input, &cmp),
        Err(SortError::InvalidArgument(_))
    ));
}

#[test]
fn test_sort_records_by_lexic_path() {
    let records = vec![
        json!({ "id": 1, "tags": [{ "label": "delta" }] }),
        json!({ "id": 2, "tags": [{ "label": "Alpha" }] }),
        json!({ "id": 3, "tags": [{ "label": "charlie" }] }),
        json!({ "id": 4, "tags": [{ "label": "ALPHA" }] }),
    ];
    let ids = |sorted: Vec<Value>| -> Vec<i64> {
        sorted.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    };
    let path = key_path!["tags", 0, "label"];

    // Ordinal: uppercase sorts before lowercase.
    let exact = comparator_lexic(LexicOptions::new().path(path.clone()));
    assert_eq!(ids(merge_sort(&records, &exact).unwrap()), vec![4, 2, 3, 1]);

    // Folded: the two alphas tie and keep their input order.
    let folded = comparator_lexic(LexicOptions::new().path(path).ignore_case(true));
    assert_eq!(ids(merge_sort(&records, &folded).unwrap()), vec![2, 4, 3, 1]);
    assert_eq!(ids(bubble_sort(&records, &folded, None).unwrap()), vec![2, 4, 3, 1]);
}

#[test]
fn test_key_path_serde_round_trip() {
    let path = key_path!["tags", 0, "label"];
    let encoded = serde_json::to_value(&path).unwrap();
    assert_eq!(encoded, json!(["tags", 0, "label"]));
    assert_eq!(serde_json::from_value::<KeyPath>(encoded).unwrap(), path);

    let single = KeyPath::from("name");
    let encoded = serde_json::to_string(&single).unwrap();
    assert_eq!(encoded, r#"["name"]"#);
    assert_eq!(serde_json::from_str::<KeyPath>(&encoded).unwrap(), single);

    let options = LexicOptions::new().path(key_path!["a", 1]).descending(true);
    let encoded = serde_json::to_string(&options).unwrap();
    assert_eq!(serde_json::from_str::<LexicOptions>(&encoded).unwrap(), options);
}
