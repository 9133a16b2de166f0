//! Construction macros for literal values.

/// Build a list value.
///
/// Elements are anything convertible into a [`Value`]; the named form
/// attaches a parallel name array.
///
/// ```
/// use talon_value::list;
///
/// let unnamed = list![1.0, "two", true];
/// assert_eq!(unnamed.len(), 3);
///
/// let named = list!["a" => 1.0, "b" => 2.0];
/// assert_eq!(named.names().map(<[_]>::len), Some(2));
/// ```
///
/// [`Value`]: crate::Value
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::List($crate::VSeq::new())
    };
    ($($name:literal => $value:expr),+ $(,)?) => {{
        let mut seq = $crate::VSeq::new();
        $(seq.push_named($name, $crate::Value::from($value));)+
        $crate::Value::List(seq)
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::Value::List($crate::VSeq::from_vec(vec![$($crate::Value::from($value)),+]))
    };
}

/// Build a record value from `name => value` pairs.
///
/// ```
/// use talon_value::record;
///
/// let x = record!["x" => 10.0, "y" => 20.0];
/// assert!(x.as_record().unwrap().contains("y"));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Value::Record($crate::VRecord::new())
    };
    ($($name:literal => $value:expr),+ $(,)?) => {{
        let mut record = $crate::VRecord::new();
        $(record.insert($name, $crate::Value::from($value));)+
        $crate::Value::Record(record)
    }};
}
