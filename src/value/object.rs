//! Represents a JSON object.
use std::{
    cell::{Ref, RefCell, RefMut},
    collections::BTreeMap,
    fmt::{self, Debug, Display},
    io::Write,
    rc::Rc,
};

use faststr::FastStr;

pub use super::keys::Iter;
use super::{
    array::SharedArray,
    container::Container,
    convert::Convert,
    keys::KeyIndex,
    stringify::{begin_container, end_container, end_member, member_step},
    var::Var,
    VarType,
};
use crate::{
    error::Result,
    format::{DefaultFormatter, Formatter},
};

cfg_if::cfg_if! {
    if #[cfg(feature = "preserve_order")] {
        const PRESERVE_ORDER_BY_DEFAULT: bool = true;
    } else {
        const PRESERVE_ORDER_BY_DEFAULT: bool = false;
    }
}

/// Represents the JSON object: a mapping from unique string keys to [`Var`]s.
///
/// The key order is chosen when the object is created and never changes: keys
/// are either visited in sorted order, or in the order they were first
/// inserted. Overwriting a key keeps its position.
///
/// # Examples
/// ```
/// use sonic_var::{Object, Var};
///
/// let mut obj = Object::with_insertion_order();
/// obj.set("b", 1);
/// obj.set("a", true);
/// obj.set("b", 2);
///
/// assert_eq!(obj.size(), 2);
/// assert_eq!(obj.get("b"), 2);
/// assert!(obj.get("missing").is_empty());
/// assert_eq!(obj.to_string(), r#"{"b":2,"a":true}"#);
/// ```
///
/// Cloning an `Object` copies its entries: the copy can be changed without
/// affecting the original. Nested objects and arrays stay shared.
#[derive(Clone)]
pub struct Object {
    values: BTreeMap<FastStr, Var>,
    keys: KeyIndex,
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Object {
    /// Two objects are equal if they have the same entries, whatever their key order.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Object {
    /// Create a new empty object. Keys are sorted, unless the `preserve_order`
    /// feature is enabled.
    #[inline]
    pub fn new() -> Object {
        Object::with_mode(PRESERVE_ORDER_BY_DEFAULT)
    }

    /// Create a new empty object that visits its keys in sorted order.
    #[inline]
    pub fn sorted() -> Object {
        Object::with_mode(false)
    }

    /// Create a new empty object that visits its keys in first-insertion order.
    #[inline]
    pub fn with_insertion_order() -> Object {
        Object::with_mode(true)
    }

    /// Create a new empty object, preserving insertion order if
    /// `preserve_insertion_order` is true.
    #[inline]
    pub fn with_mode(preserve_insertion_order: bool) -> Object {
        Object {
            values: BTreeMap::new(),
            keys: KeyIndex::new(preserve_insertion_order),
        }
    }

    /// Returns true if the keys are visited in first-insertion order.
    #[inline]
    pub fn preserves_insertion_order(&self) -> bool {
        self.keys.preserves_insertion_order()
    }

    /// Returns the value of `key`, or an empty `Var` if the key is absent.
    #[inline]
    pub fn get(&self, key: &str) -> Var {
        self.values.get(key).cloned().unwrap_or_default()
    }

    /// Returns a reference to the value of `key`, if present.
    #[inline]
    pub fn get_ref(&self, key: &str) -> Option<&Var> {
        self.values.get(key)
    }

    /// Returns the array handle stored at `key`. Returns `None` if the key is
    /// absent or holds anything other than an array.
    ///
    /// # Examples
    /// ```
    /// use sonic_var::{array, Object};
    ///
    /// let mut obj = Object::new();
    /// obj.set("list", array![1, 2]);
    /// obj.set("text", "[1, 2]");
    ///
    /// assert_eq!(obj.get_array("list").unwrap().borrow().size(), 2);
    /// assert!(obj.get_array("text").is_none());
    /// ```
    #[inline]
    pub fn get_array(&self, key: &str) -> Option<SharedArray> {
        self.values.get(key).and_then(Var::as_array).cloned()
    }

    /// Returns the object handle stored at `key`. Returns `None` if the key is
    /// absent or holds anything other than an object.
    #[inline]
    pub fn get_object(&self, key: &str) -> Option<SharedObject> {
        self.values.get(key).and_then(Var::as_object).cloned()
    }

    /// Converts the value of `key` to `T`. An absent key fails like an empty value.
    ///
    /// # Examples
    /// ```
    /// use sonic_var::Object;
    ///
    /// let mut obj = Object::new();
    /// obj.set("port", "8080");
    ///
    /// assert_eq!(obj.get_value::<u16>("port").unwrap(), 8080);
    /// assert!(obj.get_value::<u16>("host").is_err());
    /// ```
    #[inline]
    pub fn get_value<T: Convert>(&self, key: &str) -> Result<T> {
        match self.values.get(key) {
            Some(var) => var.convert(),
            None => Var::Empty.convert(),
        }
    }

    /// Converts the value of `key` to `T`, returning `default` if the key is
    /// absent, the value is empty, or the conversion fails.
    ///
    /// # Examples
    /// ```
    /// use sonic_var::Object;
    ///
    /// let mut obj = Object::new();
    /// obj.set("name", "sonic");
    ///
    /// assert_eq!(obj.opt_value("missing", 42), 42);
    /// assert_eq!(obj.opt_value("name", 42), 42);
    /// ```
    #[inline]
    pub fn opt_value<T: Convert>(&self, key: &str, default: T) -> T {
        match self.values.get(key) {
            Some(var) if !var.is_empty() => var.try_convert().unwrap_or(default),
            _ => default,
        }
    }

    /// Returns true if the object contains `key`.
    #[inline]
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns true if `key` holds an array.
    #[inline]
    pub fn is_array(&self, key: &str) -> bool {
        self.values.get(key).map_or(false, Var::is_array)
    }

    /// Returns true if `key` holds an object.
    #[inline]
    pub fn is_object(&self, key: &str) -> bool {
        self.values.get(key).map_or(false, Var::is_object)
    }

    /// Returns true if `key` is absent or holds an empty value. The two cases
    /// are not distinguished; use [`Object::has`] for that.
    #[inline]
    pub fn is_null(&self, key: &str) -> bool {
        self.values.get(key).map_or(true, Var::is_empty)
    }

    /// Appends all keys to `names`, in the object's key order.
    pub fn get_names(&self, names: &mut Vec<String>) {
        names.reserve(self.size());
        names.extend(self.iter().map(|(k, _)| k.to_string()));
    }

    /// Returns an iterator over the keys, in the object's key order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Inserts `value` at `key`, or overwrites the existing value in place.
    /// Returns the previous value, if any.
    pub fn set<K: AsRef<str> + ?Sized, V: Into<Var>>(&mut self, key: &K, value: V) -> Option<Var> {
        let key = key.as_ref();
        let value = value.into();
        if let Some(slot) = self.values.get_mut(key) {
            return Some(std::mem::replace(slot, value));
        }
        let key = FastStr::new(key);
        self.keys.inserted(&key);
        self.values.insert(key, value);
        None
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Var> {
        let removed = self.values.remove(key);
        if removed.is_some() {
            self.keys.removed(key);
        }
        removed
    }

    /// Removes all entries. The key order mode is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
        self.keys.clear();
    }

    /// Returns an iterator over the entries, in the object's key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        self.keys.iter(&self.values)
    }

    /// Writes the object as JSON text.
    ///
    /// With `indent == 0` the output is a single line. Otherwise every entry is
    /// placed on its own line, indented by `indent` spaces, and nested
    /// containers are indented `step` more spaces per level. A negative `step`
    /// uses `indent` as the step.
    ///
    /// # Examples
    /// ```
    /// use sonic_var::Object;
    ///
    /// let mut obj = Object::new();
    /// obj.set("a", 1);
    ///
    /// let mut out = Vec::new();
    /// obj.stringify(&mut out, 2, 2).unwrap();
    /// assert_eq!(out, b"{\n  \"a\" : 1\n}");
    /// ```
    #[inline]
    pub fn stringify<W>(&self, out: &mut W, indent: usize, step: isize) -> Result<()>
    where
        W: ?Sized + Write,
    {
        self.stringify_with(out, &mut DefaultFormatter, indent, step)
    }

    /// Like [`Object::stringify`], writing the leaf values with `formatter`.
    pub fn stringify_with<W, F>(
        &self,
        out: &mut W,
        formatter: &mut F,
        indent: usize,
        step: isize,
    ) -> Result<()>
    where
        W: ?Sized + Write,
        F: Formatter,
    {
        let step = member_step(indent, step);
        begin_container(out, b"{", indent)?;
        let mut entries = self.iter().peekable();
        while let Some((key, value)) = entries.next() {
            formatter.write_indent(out, indent)?;
            formatter.write_key(out, key)?;
            out.write_all(if indent > 0 { b" : " } else { b":" })?;
            super::stringify_with(value, out, formatter, indent + step, step as isize)?;
            end_member(out, entries.peek().is_none(), step)?;
        }
        end_container(out, formatter, b"}", indent, step)
    }

    /// Returns the JSON text of the object, see [`Object::stringify`].
    pub fn to_json_string(&self, indent: usize) -> Result<String> {
        let mut buf = Vec::with_capacity(self.size() * 16 + 2);
        self.stringify(&mut buf, indent, -1)?;
        // the stringifier only writes valid UTF-8
        Ok(unsafe { String::from_utf8_unchecked(buf) })
    }

    /// Moves the object into a new shared handle.
    #[inline]
    pub fn into_shared(self) -> SharedObject {
        SharedObject::new(self)
    }
}

impl Container for Object {
    const VAR_TYPE: VarType = VarType::Object;

    #[inline]
    fn size(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn to_json_string(&self, indent: usize) -> Result<String> {
        Object::to_json_string(self, indent)
    }
}

impl Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Display for Object {
    /// Writes the compact JSON text of the object.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_json_string(0).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a Var);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: AsRef<str>, V: Into<Var>> FromIterator<(K, V)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut obj = Object::new();
        obj.extend(iter);
        obj
    }
}

impl<K: AsRef<str>, V: Into<Var>> Extend<(K, V)> for Object {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.set(k.as_ref(), v);
        }
    }
}

/// A shared handle to an [`Object`].
///
/// Handles are single-threaded: cloning one does not copy the object, and the
/// object is dropped when the last handle is released.
///
/// # Examples
/// ```
/// use sonic_var::{Object, SharedObject};
///
/// let shared = SharedObject::new(Object::new());
/// let alias = shared.clone();
/// alias.borrow_mut().set("k", "v");
///
/// assert!(shared.borrow().has("k"));
/// assert!(shared.ptr_eq(&alias));
/// ```
#[derive(Clone, Default)]
pub struct SharedObject(Rc<RefCell<Object>>);

impl SharedObject {
    #[inline]
    pub fn new(obj: Object) -> Self {
        SharedObject(Rc::new(RefCell::new(obj)))
    }

    /// Immutably borrows the object.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently mutably borrowed.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, Object> {
        self.0.borrow()
    }

    /// Mutably borrows the object.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently borrowed.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Object> {
        self.0.borrow_mut()
    }

    /// Returns true if both handles refer to the same object.
    #[inline]
    pub fn ptr_eq(&self, other: &SharedObject) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the number of handles referring to this object.
    #[inline]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Returns a copy of the object, detached from this handle.
    #[inline]
    pub fn to_object(&self) -> Object {
        self.borrow().clone()
    }
}

impl PartialEq for SharedObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.borrow() == *other.borrow()
    }
}

impl Debug for SharedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.borrow(), f)
    }
}

impl From<Object> for SharedObject {
    #[inline]
    fn from(obj: Object) -> Self {
        SharedObject::new(obj)
    }
}

#[cfg(test)]
mod test {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use tracing::{span, subscriber::Interest, Event, Metadata, Subscriber};

    use super::*;
    use crate::{array, object, Array, Timestamp};

    /// Counts the events dispatched while it is the default subscriber.
    struct CountEvents(Arc<AtomicUsize>);

    impl Subscriber for CountEvents {
        fn register_callsite(&self, _: &'static Metadata<'static>) -> Interest {
            Interest::sometimes()
        }

        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

        fn event(&self, _: &Event<'_>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        fn enter(&self, _: &span::Id) {}

        fn exit(&self, _: &span::Id) {}
    }

    fn count_events(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        tracing::subscriber::with_default(CountEvents(count.clone()), f);
        count.load(Ordering::SeqCst)
    }

    fn stringify_to_string(obj: &Object, indent: usize, step: isize) -> String {
        let mut out = Vec::new();
        obj.stringify(&mut out, indent, step).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn names(obj: &Object) -> Vec<String> {
        let mut out = Vec::new();
        obj.get_names(&mut out);
        out
    }

    #[test]
    fn test_absent_key() {
        let obj = Object::new();
        assert!(!obj.has("k"));
        assert!(obj.is_null("k"));
        assert!(obj.get("k").is_empty());
        assert!(obj.get_ref("k").is_none());
        assert!(!obj.is_array("k"));
        assert!(!obj.is_object("k"));
        assert!(obj.get_array("k").is_none());
        assert!(obj.get_object("k").is_none());
    }

    #[test]
    fn test_set_overwrite_remove() {
        for mut obj in [Object::sorted(), Object::with_insertion_order()] {
            assert_eq!(obj.set("k", 1), None);
            assert!(obj.has("k"));
            assert_eq!(obj.get("k"), 1);
            assert_eq!(obj.size(), 1);

            assert_eq!(obj.set("k", "v2").unwrap(), 1);
            assert_eq!(obj.size(), 1);
            assert_eq!(obj.get("k"), "v2");

            assert_eq!(obj.remove("k").unwrap(), "v2");
            assert!(!obj.has("k"));
            assert_eq!(obj.size(), 0);

            assert!(obj.remove("k").is_none());
            assert_eq!(obj.size(), 0);
            assert_eq!(obj.iter().count(), 0);
        }
    }

    #[test]
    fn test_explicit_empty_is_null() {
        let mut obj = Object::new();
        obj.set("n", Var::Empty);
        assert!(obj.has("n"));
        assert!(obj.is_null("n"));
        assert_eq!(obj.opt_value("n", 5), 5);
    }

    #[test]
    fn test_insertion_order_names() {
        let mut obj = Object::with_insertion_order();
        for k in ["zeta", "alpha", "mid"] {
            obj.set(k, k.len());
        }
        obj.set("alpha", 0);
        assert_eq!(names(&obj), ["zeta", "alpha", "mid"]);

        obj.remove("zeta");
        obj.set("zeta", 1);
        assert_eq!(names(&obj), ["alpha", "mid", "zeta"]);
        assert!(obj.preserves_insertion_order());
    }

    #[test]
    fn test_sorted_names() {
        let mut obj = Object::sorted();
        for k in ["zeta", "alpha", "Mid", "mid"] {
            obj.set(k, 1);
        }
        assert_eq!(names(&obj), ["Mid", "alpha", "mid", "zeta"]);
        assert!(!obj.preserves_insertion_order());

        let mut appended = vec!["first".to_string()];
        obj.get_names(&mut appended);
        assert_eq!(appended.len(), 5);
        assert_eq!(appended[0], "first");
    }

    #[test]
    fn test_typed_getters() {
        let mut obj = Object::new();
        obj.set("arr", array![1, 2, 3]);
        obj.set("obj", object! {"x": 1});
        obj.set("num", 7);
        obj.set("text", "hello");

        assert!(obj.is_array("arr"));
        assert!(!obj.is_object("arr"));
        assert!(obj.is_object("obj"));
        assert!(obj.get_array("obj").is_none());
        assert!(obj.get_object("num").is_none());
        assert_eq!(obj.get_object("obj").unwrap().borrow().get("x"), 1);
        assert_eq!(obj.get_array("arr").unwrap().borrow().size(), 3);

        assert_eq!(obj.get_value::<i64>("num").unwrap(), 7);
        assert_eq!(obj.get_value::<String>("num").unwrap(), "7");
        assert!(obj.get_value::<i32>("text").unwrap_err().is_syntax());
        assert!(obj.get_value::<i32>("missing").unwrap_err().is_access());
        assert!(obj.get_value::<i32>("obj").unwrap_err().is_bad_cast());

        assert_eq!(obj.opt_value::<i32>("missing", 42), 42);
        assert_eq!(obj.opt_value::<i32>("text", 42), 42);
        assert_eq!(obj.opt_value::<i32>("num", 42), 7);
        assert_eq!(obj.opt_value::<String>("text", String::new()), "hello");
    }

    #[test]
    fn test_nested_handles_are_shared() {
        let inner = SharedObject::new(Object::new());
        let mut outer = Object::new();
        outer.set("inner", inner.clone());
        inner.borrow_mut().set("late", true);
        assert!(outer.get_object("inner").unwrap().borrow().has("late"));
        assert_eq!(inner.handle_count(), 2);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = Object::with_insertion_order();
        original.set("a", 1);
        original.set("b", 2);

        let mut copy = original.clone();
        copy.set("a", 100);
        copy.remove("b");
        copy.set("c", 3);

        assert_eq!(original.get("a"), 1);
        assert_eq!(original.get("b"), 2);
        assert!(!original.has("c"));
        assert_eq!(names(&original), ["a", "b"]);
        assert_eq!(names(&copy), ["a", "c"]);
    }

    #[test]
    fn test_stringify_compact() {
        let mut obj = Object::sorted();
        obj.set("b", "x");
        obj.set("a", 1);
        assert_eq!(obj.to_json_string(0).unwrap(), r#"{"a":1,"b":"x"}"#);

        let mut obj = Object::with_insertion_order();
        obj.set("b", "x");
        obj.set("a", 1);
        assert_eq!(obj.to_json_string(0).unwrap(), r#"{"b":"x","a":1}"#);

        assert_eq!(Object::new().to_json_string(0).unwrap(), "{}");
    }

    #[test]
    fn test_stringify_indented() {
        let mut obj = Object::new();
        obj.set("a", 1);
        let mut out = Vec::new();
        obj.stringify(&mut out, 2, 2).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"a\" : 1\n}");

        // the default step is the indent
        assert_eq!(obj.to_json_string(2).unwrap(), "{\n  \"a\" : 1\n}");
        assert_eq!(obj.to_json_string(4).unwrap(), "{\n    \"a\" : 1\n}");
    }

    #[test]
    fn test_stringify_nested() {
        let mut inner = Object::sorted();
        inner.set("x", Var::Empty);
        inner.set("y", array![1, "two"]);
        let mut obj = Object::with_insertion_order();
        obj.set("name", "n");
        obj.set("inner", inner);

        let expect = concat!(
            "{\n",
            "  \"name\" : \"n\",\n",
            "  \"inner\" : {\n",
            "    \"x\" : null,\n",
            "    \"y\" : [\n",
            "      1,\n",
            "      \"two\"\n",
            "    ]\n",
            "  }\n",
            "}"
        );
        assert_eq!(obj.to_json_string(2).unwrap(), expect);
        assert_eq!(
            obj.to_json_string(0).unwrap(),
            r#"{"name":"n","inner":{"x":null,"y":[1,"two"]}}"#
        );
    }

    #[test]
    fn test_stringify_step_edges() {
        let mut obj = Object::sorted();
        obj.set("a", 1);
        obj.set("b", 2);

        // no step: entries share a line, the closing brace keeps the indent
        assert_eq!(
            stringify_to_string(&obj, 2, 0),
            "{\n  \"a\" : 1,  \"b\" : 2  }"
        );
        // no indent: compact separators, one entry per line
        assert_eq!(stringify_to_string(&obj, 0, 2), "{\"a\":1,\n\"b\":2\n}");
        // the closing brace never goes left of column zero
        assert_eq!(
            stringify_to_string(&obj, 1, 2),
            "{\n \"a\" : 1,\n \"b\" : 2\n}"
        );
        assert_eq!(stringify_to_string(&Object::new(), 1, 3), "{\n}");
    }

    #[test]
    fn test_opt_value_is_silent() {
        let mut obj = Object::new();
        obj.set("nested", object! {"a": 1});
        obj.set("list", array![1]);

        let events = count_events(|| {
            assert_eq!(obj.opt_value::<i32>("nested", 42), 42);
            let fallback = Timestamp::from_micros(7);
            assert_eq!(obj.opt_value("list", fallback), fallback);
        });
        assert_eq!(events, 0);

        let events = count_events(|| {
            assert!(obj.get_value::<i32>("nested").unwrap_err().is_bad_cast());
        });
        assert_eq!(events, 1);
    }

    #[test]
    fn test_stringify_escapes_keys() {
        let mut obj = Object::new();
        obj.set("quo\"te", "line\nbreak");
        assert_eq!(
            obj.to_json_string(0).unwrap(),
            r#"{"quo\"te":"line\nbreak"}"#
        );
    }

    #[test]
    fn test_stringify_output_is_json() {
        let mut obj = Object::with_insertion_order();
        obj.set("s", "π \u{1} \"q\"");
        obj.set("f", 0.25);
        obj.set("neg", -3);
        obj.set("big", u64::MAX);
        obj.set("c", 'c');
        obj.set("list", array![true, Var::Empty, object! {"k": Array::new()}]);
        obj.set("empty", Array::new());

        for indent in [0, 1, 2, 4] {
            let text = obj.to_json_string(indent).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert_eq!(parsed["s"], "π \u{1} \"q\"");
            assert_eq!(parsed["f"], 0.25);
            assert_eq!(parsed["big"], u64::MAX);
            assert_eq!(parsed["c"], "c");
            assert_eq!(parsed["list"][1], serde_json::Value::Null);
            let keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();
            assert_eq!(keys, ["s", "f", "neg", "big", "c", "list", "empty"]);
        }
    }

    #[test]
    fn test_equality_ignores_mode() {
        let mut a = Object::sorted();
        let mut b = Object::with_insertion_order();
        a.set("x", 1);
        a.set("y", 2);
        b.set("y", 2);
        b.set("x", 1);
        assert_eq!(a, b);
        b.set("y", 3);
        assert_ne!(a, b);
    }

    #[test]
    fn test_collect_and_clear() {
        let mut obj: Object = [("b", 1), ("a", 2)].into_iter().collect();
        assert_eq!(obj.size(), 2);
        assert_eq!(obj.keys().count(), 2);
        obj.clear();
        assert!(obj.is_empty());
        obj.set("z", 1);
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["z"]);
    }
}
