/// Construct an [`Array`](crate::Array) from a list of expressions. Each
/// element is converted with `Into<Var>`.
///
/// ```
/// use sonic_var::{array, Var};
///
/// let arr = array![1, "two", 3.0, Var::Empty];
/// assert_eq!(arr.size(), 4);
/// assert!(arr.is_null(3));
///
/// // trailing commas are allowed
/// let arr = array!["notice", "the", "trailing", "comma -->",];
/// assert_eq!(arr.size(), 4);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };

    ($($elem:expr),+ $(,)?) => {{
        let mut array = $crate::Array::with_capacity($crate::__count!($($elem)+));
        $(
            array.add($elem);
        )+
        array
    }};
}

/// Construct an [`Object`](crate::Object) from `key: value` pairs. Keys are
/// any `AsRef<str>` expressions and values are converted with `Into<Var>`.
///
/// The object uses the default key order, see [`Object::new`](crate::Object::new).
///
/// ```
/// use sonic_var::{array, object};
///
/// let name = "sonic";
/// let obj = object! {
///     "name": name,
///     "version": 1,
///     "tags": array!["json", "var"],
///     "nested": object! {"ok": true},
/// };
/// assert_eq!(obj.size(), 4);
/// assert_eq!(obj.get("name"), "sonic");
/// assert!(obj.is_object("nested"));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::Object::new()
    };

    ($($key:tt : $value:expr),+ $(,)?) => {{
        let mut object = $crate::Object::new();
        $(
            object.set(&$key, $value);
        )+
        object
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    () => { 0usize };
    ($head:tt $($tail:tt)*) => { 1usize + $crate::__count!($($tail)*) };
}
