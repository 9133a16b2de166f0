//! Running folds agree with their reductions and carry names along.

use talon::{Value, accumulate, accumulate_right, list, record, reduce, reduce_right};
use talon_value::Error;

fn add(a: &Value, b: &Value) -> Result<Value, Error> {
    Ok(Value::double(
        a.as_scalar_f64().unwrap_or(f64::NAN) + b.as_scalar_f64().unwrap_or(f64::NAN),
    ))
}

#[test]
fn last_partial_agrees_with_reduce() {
    talon_testhelpers::setup();

    for input in [
        Value::from(vec![1.0]),
        Value::from(vec![1.0, 2.0, 3.0]),
        list![2.0, 4.0, 8.0, 16.0],
    ] {
        let all = accumulate(&input, add, None).unwrap();
        let list = all.as_list().unwrap();
        let last = list.get(list.len() - 1).cloned().unwrap();
        assert_eq!(last, reduce(&input, add, None).unwrap());
    }
}

#[test]
fn first_right_partial_agrees_with_reduce_right() {
    talon_testhelpers::setup();

    let input = Value::from(vec![1.0, 2.0, 3.0]);
    let all = accumulate_right(&input, add, None).unwrap();
    let first = all.as_list().unwrap().get(0).cloned().unwrap();
    assert_eq!(first, reduce_right(&input, add, None).unwrap());
}

#[test]
fn record_keys_become_partial_result_names() {
    talon_testhelpers::setup();

    let x = record!["jan" => 10.0, "feb" => 20.0, "mar" => 5.0];
    let out = accumulate(&x, add, None).unwrap();
    assert_eq!(out, list!["jan" => 10.0, "feb" => 30.0, "mar" => 35.0]);
}

#[test]
fn seeded_accumulation_tags_the_seed_slot() {
    talon_testhelpers::setup();

    let x = list!["a" => 1.0, "b" => 2.0];
    let forward = accumulate(&x, add, Some(Value::double(100.0))).unwrap();
    assert_eq!(
        forward,
        list![".init" => 100.0, "a" => 101.0, "b" => 103.0]
    );

    let backward = accumulate_right(&x, add, Some(Value::double(100.0))).unwrap();
    assert_eq!(
        backward,
        list!["a" => 103.0, "b" => 102.0, ".init" => 100.0]
    );
}

#[test]
fn lengths_follow_the_seed_rule() {
    talon_testhelpers::setup();

    let x = Value::from(vec![1.0, 2.0, 3.0]);
    assert_eq!(accumulate(&x, add, None).unwrap().len(), 3);
    assert_eq!(
        accumulate(&x, add, Some(Value::double(0.0))).unwrap().len(),
        4
    );
    assert_eq!(accumulate(&list![], add, None).unwrap().len(), 0);
}
