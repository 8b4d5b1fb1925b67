//! Represents a JSON array.
use std::{
    cell::{Ref, RefCell, RefMut},
    fmt::{self, Debug, Display},
    io::Write,
    rc::Rc,
    slice,
};

use super::{
    container::Container,
    convert::Convert,
    object::SharedObject,
    stringify::{begin_container, end_container, end_member, member_step},
    var::Var,
    VarType,
};
use crate::{
    error::Result,
    format::{DefaultFormatter, Formatter},
};

/// Array represents a JSON array, an ordered sequence of [`Var`]s.
///
/// Its accessors mirror those of [`Object`](super::Object), taking an index
/// instead of a key.
///
/// # Example
/// ```
/// use sonic_var::{array, Array};
///
/// let mut arr = array![1, "two"];
/// arr.add(3.5);
/// assert_eq!(arr.size(), 3);
/// assert_eq!(arr.get(1), "two");
/// assert!(arr.get(10).is_empty());
///
/// arr.set(5, true);
/// assert_eq!(arr.size(), 6);
/// assert!(arr.is_null(4));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Array(Vec<Var>);

impl Array {
    /// Constructs a new, empty `Array`.
    #[inline]
    pub const fn new() -> Self {
        Array(Vec::new())
    }

    /// Constructs a new, empty `Array` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Array(Vec::with_capacity(capacity))
    }

    /// Returns the element at `index`, or an empty `Var` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Var {
        self.0.get(index).cloned().unwrap_or_default()
    }

    #[inline]
    pub fn get_ref(&self, index: usize) -> Option<&Var> {
        self.0.get(index)
    }

    /// Returns the array handle at `index`, if the element is an array.
    #[inline]
    pub fn get_array(&self, index: usize) -> Option<SharedArray> {
        self.0.get(index).and_then(Var::as_array).cloned()
    }

    /// Returns the object handle at `index`, if the element is an object.
    #[inline]
    pub fn get_object(&self, index: usize) -> Option<SharedObject> {
        self.0.get(index).and_then(Var::as_object).cloned()
    }

    /// Converts the element at `index` to `T`. An index out of bounds fails
    /// like an empty value.
    #[inline]
    pub fn get_value<T: Convert>(&self, index: usize) -> Result<T> {
        match self.0.get(index) {
            Some(var) => var.convert(),
            None => Var::Empty.convert(),
        }
    }

    /// Converts the element at `index` to `T`, returning `default` if the
    /// element is missing, empty, or not convertible.
    #[inline]
    pub fn opt_value<T: Convert>(&self, index: usize, default: T) -> T {
        match self.0.get(index) {
            Some(var) if !var.is_empty() => var.try_convert().unwrap_or(default),
            _ => default,
        }
    }

    #[inline]
    pub fn is_array(&self, index: usize) -> bool {
        self.0.get(index).map_or(false, Var::is_array)
    }

    #[inline]
    pub fn is_object(&self, index: usize) -> bool {
        self.0.get(index).map_or(false, Var::is_object)
    }

    /// Returns true if `index` is out of bounds or holds an empty value.
    #[inline]
    pub fn is_null(&self, index: usize) -> bool {
        self.0.get(index).map_or(true, Var::is_empty)
    }

    /// Appends an element.
    #[inline]
    pub fn add<V: Into<Var>>(&mut self, value: V) {
        self.0.push(value.into());
    }

    /// Stores `value` at `index`. If `index` is past the end, the array is
    /// first padded with empty values.
    ///
    /// # Panics
    ///
    /// Panics if the padded length exceeds the capacity a `Vec` can hold,
    /// which includes `index == usize::MAX`.
    pub fn set<V: Into<Var>>(&mut self, index: usize, value: V) {
        if index >= self.0.len() {
            let len = index.checked_add(1).unwrap_or(usize::MAX);
            self.0.resize_with(len, Var::default);
        }
        self.0[index] = value.into();
    }

    /// Removes the element at `index`, shifting all later elements left.
    /// Returns `None` if `index` is out of bounds.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<Var> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Var> {
        self.0.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Var] {
        &self.0
    }

    /// Writes the array as JSON text. `indent` and `step` have the meaning of
    /// [`Object::stringify`](super::Object::stringify).
    #[inline]
    pub fn stringify<W>(&self, out: &mut W, indent: usize, step: isize) -> Result<()>
    where
        W: ?Sized + Write,
    {
        self.stringify_with(out, &mut DefaultFormatter, indent, step)
    }

    /// Like [`Array::stringify`], writing the leaf values with `formatter`.
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
        begin_container(out, b"[", indent)?;
        let len = self.0.len();
        for (i, value) in self.0.iter().enumerate() {
            formatter.write_indent(out, indent)?;
            super::stringify_with(value, out, formatter, indent + step, step as isize)?;
            end_member(out, i + 1 == len, step)?;
        }
        end_container(out, formatter, b"]", indent, step)
    }

    /// Returns the JSON text of the array, see [`Array::stringify`].
    pub fn to_json_string(&self, indent: usize) -> Result<String> {
        let mut buf = Vec::with_capacity(self.size() * 8 + 2);
        self.stringify(&mut buf, indent, -1)?;
        // the stringifier only writes valid UTF-8
        Ok(unsafe { String::from_utf8_unchecked(buf) })
    }

    /// Moves the array into a new shared handle.
    #[inline]
    pub fn into_shared(self) -> SharedArray {
        SharedArray::new(self)
    }
}

impl Container for Array {
    const VAR_TYPE: VarType = VarType::Array;

    #[inline]
    fn size(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn to_json_string(&self, indent: usize) -> Result<String> {
        Array::to_json_string(self, indent)
    }
}

impl Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_json_string(0).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Var;
    type IntoIter = slice::Iter<'a, Var>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Array {
    type Item = Var;
    type IntoIter = std::vec::IntoIter<Var>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: Into<Var>> FromIterator<V> for Array {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Var>> Extend<V> for Array {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

/// A shared handle to an [`Array`]. See [`SharedObject`].
#[derive(Clone, Default)]
pub struct SharedArray(Rc<RefCell<Array>>);

impl SharedArray {
    #[inline]
    pub fn new(arr: Array) -> Self {
        SharedArray(Rc::new(RefCell::new(arr)))
    }

    /// Immutably borrows the array.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently mutably borrowed.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, Array> {
        self.0.borrow()
    }

    /// Mutably borrows the array.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently borrowed.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Array> {
        self.0.borrow_mut()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &SharedArray) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    #[inline]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    #[inline]
    pub fn to_array(&self) -> Array {
        self.borrow().clone()
    }
}

impl PartialEq for SharedArray {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.borrow() == *other.borrow()
    }
}

impl Debug for SharedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.borrow(), f)
    }
}

impl From<Array> for SharedArray {
    #[inline]
    fn from(arr: Array) -> Self {
        SharedArray::new(arr)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{array, object, Object};

    #[test]
    fn test_out_of_bounds() {
        let arr = Array::new();
        assert!(arr.get(0).is_empty());
        assert!(arr.is_null(0));
        assert!(!arr.is_array(0));
        assert!(arr.get_object(0).is_none());
        assert!(arr.get_value::<i32>(0).unwrap_err().is_access());
        assert_eq!(arr.opt_value(3, 'z'), 'z');
    }

    #[test]
    fn test_set_pads_with_empty() {
        let mut arr = array![1];
        arr.set(3, "x");
        assert_eq!(arr.size(), 4);
        assert!(arr.is_null(1));
        assert!(arr.is_null(2));
        assert_eq!(arr.get(3), "x");

        arr.set(0, 2);
        assert_eq!(arr.size(), 4);
        assert_eq!(arr.get(0), 2);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_set_past_max_index() {
        let mut arr = array![1];
        arr.set(usize::MAX, 2);
    }

    #[test]
    fn test_remove_shifts() {
        let mut arr: Array = [1, 2, 3].into_iter().collect();
        assert_eq!(arr.remove(0).unwrap(), 1);
        assert_eq!(arr.get(0), 2);
        assert_eq!(arr.size(), 2);
        assert!(arr.remove(5).is_none());
        assert_eq!(arr.size(), 2);
    }

    #[test]
    fn test_nested_access() {
        let mut arr = Array::new();
        arr.add(object! {"k": 1});
        arr.add(array!["a"]);
        arr.add("5");

        assert!(arr.is_object(0));
        assert!(arr.is_array(1));
        assert_eq!(arr.get_object(0).unwrap().borrow().get("k"), 1);
        assert_eq!(arr.get_array(1).unwrap().borrow().get(0), "a");
        assert_eq!(arr.get_value::<u8>(2).unwrap(), 5);
        assert!(arr.get_value::<u8>(0).unwrap_err().is_bad_cast());
        assert_eq!(arr.opt_value::<u8>(0, 9), 9);
    }

    #[test]
    fn test_stringify() {
        let arr = array![1, "a", Var::Empty];
        assert_eq!(arr.to_json_string(0).unwrap(), r#"[1,"a",null]"#);
        assert_eq!(
            arr.to_json_string(2).unwrap(),
            "[\n  1,\n  \"a\",\n  null\n]"
        );

        let mut obj = Object::sorted();
        obj.set("k", array![Object::new()]);
        assert_eq!(obj.to_json_string(0).unwrap(), r#"{"k":[{}]}"#);
    }

    #[test]
    fn test_to_string_conversion() {
        let var = Var::from(array![1, 2]);
        assert_eq!(var.convert::<String>().unwrap(), "[\n  1,\n  2\n]");
        assert!(var.convert::<bool>().unwrap());
    }

    #[test]
    fn test_shared_array() {
        let shared = array![1].into_shared();
        let alias = shared.clone();
        alias.borrow_mut().add(2);
        assert_eq!(shared.borrow().size(), 2);
        assert_eq!(shared.handle_count(), 2);

        let copy = shared.to_array();
        shared.borrow_mut().clear();
        assert_eq!(copy.size(), 2);
        assert!(shared.borrow().is_empty());
    }
}
