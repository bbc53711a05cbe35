//! An insertion-ordered map of keys to values.
//!
//! The map is backed by [`IndexMap`]. Keys iterate in first-insertion order,
//! and updating the value of an existing key does not move the key.
//!
//! [`IndexMap`]: https://docs.rs/indexmap/*/indexmap/map/struct.IndexMap.html

use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::iter::FusedIterator;
use std::mem;
use std::ops;

/// An associative container that preserves the insertion order of its keys.
///
/// Iteration yields pairs in the order keys were first inserted. Inserting a
/// key that is already present updates the value in place and keeps the key's
/// original position; [`remove`](Map::remove) closes the gap it leaves, so the
/// relative order of the remaining keys is unchanged.
///
/// Equality compares the two maps as sets of pairs and ignores order; compare
/// the output of [`iter`](Map::iter) when order matters.
pub struct Map<K = String, V = serde_json::Value> {
    map: IndexMap<K, V>,
}

impl<K, V> Map<K, V> {
    /// Makes a new empty Map.
    #[inline]
    pub fn new() -> Self {
        Map {
            map: IndexMap::new(),
        }
    }

    /// Makes a new empty Map with the given initial capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Map {
            map: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Clears the map, removing all values.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but `Hash` and
    /// `Eq` on the borrowed form *must* match the key type.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: ?Sized + Eq + Hash,
    {
        self.map.get(key)
    }

    /// Returns true if the map contains a value for the specified key.
    ///
    /// The key may be any borrowed form of the map's key type, but `Hash` and
    /// `Eq` on the borrowed form *must* match the key type.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Eq + Hash,
        Q: ?Sized + Eq + Hash,
    {
        self.map.contains_key(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but `Hash` and
    /// `Eq` on the borrowed form *must* match the key type.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: ?Sized + Eq + Hash,
    {
        self.map.get_mut(key)
    }

    /// Returns the key-value pair matching the given key.
    ///
    /// The key may be any borrowed form of the map's key type, but `Hash` and
    /// `Eq` on the borrowed form *must* match the key type.
    #[inline]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: ?Sized + Eq + Hash,
    {
        self.map.get_key_value(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, it is appended after the
    /// last key and `None` is returned.
    ///
    /// If the map did have this key present, the value is updated, the key
    /// keeps its original position, and the old value is returned.
    #[inline]
    pub fn insert(&mut self, k: K, v: V) -> Option<V>
    where
        K: Eq + Hash,
    {
        self.map.insert(k, v)
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map.
    ///
    /// The entry is removed by shifting all of the entries that follow it,
    /// preserving their relative order, like [`Vec::remove`]. This takes
    /// **O(n)** time; use [`swap_remove`](Map::swap_remove) when the order of
    /// the remaining entries does not matter.
    ///
    /// [`Vec::remove`]: std::vec::Vec::remove
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: ?Sized + Eq + Hash,
    {
        self.map.shift_remove(key)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    ///
    /// Preserves the relative order of the remaining entries, like
    /// [`remove`](Map::remove).
    #[inline]
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: ?Sized + Eq + Hash,
    {
        self.map.shift_remove_entry(key)
    }

    /// Removes and returns the value corresponding to the key from the map.
    ///
    /// Like [`Vec::swap_remove`], the entry is removed by swapping it with the
    /// last element of the map and popping it off. This perturbs the position
    /// of what used to be the last element!
    ///
    /// [`Vec::swap_remove`]: std::vec::Vec::swap_remove
    #[inline]
    pub fn swap_remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: ?Sized + Eq + Hash,
    {
        self.map.swap_remove(key)
    }

    /// Remove and return the key-value pair.
    ///
    /// Like [`Vec::swap_remove`], the entry is removed by swapping it with the
    /// last element of the map and popping it off. This perturbs the position
    /// of what used to be the last element!
    ///
    /// [`Vec::swap_remove`]: std::vec::Vec::swap_remove
    #[inline]
    pub fn swap_remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: ?Sized + Eq + Hash,
    {
        self.map.swap_remove_entry(key)
    }

    /// Moves all elements from other into self, leaving other empty.
    ///
    /// Keys from `other` that are new to `self` are appended in `other`'s
    /// order; keys already present keep their position and take `other`'s
    /// value.
    #[inline]
    pub fn append(&mut self, other: &mut Self)
    where
        K: Eq + Hash,
    {
        self.map.extend(mem::take(&mut other.map));
    }

    /// Gets the given key's corresponding entry in the map for in-place
    /// manipulation.
    pub fn entry<S>(&mut self, key: S) -> Entry<K, V>
    where
        K: Eq + Hash,
        S: Into<K>,
    {
        match self.map.entry(key.into()) {
            indexmap::map::Entry::Vacant(vacant) => Entry::Vacant(VacantEntry { vacant }),
            indexmap::map::Entry::Occupied(occupied) => {
                Entry::Occupied(OccupiedEntry { occupied })
            }
        }
    }

    /// Returns the number of elements in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the map contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the first key-value pair in insertion order, or `None` if the
    /// map is empty.
    #[inline]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.map.first()
    }

    /// Returns the last key-value pair in insertion order, or `None` if the
    /// map is empty.
    #[inline]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.map.last()
    }

    /// Returns the key-value pair at the given position in insertion order,
    /// or `None` if the position is out of bounds.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.map.get_index(index)
    }

    /// Gets an iterator over the entries of the map, in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<K, V> {
        Iter {
            iter: self.map.iter(),
        }
    }

    /// Gets a mutable iterator over the entries of the map, in insertion
    /// order.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        IterMut {
            iter: self.map.iter_mut(),
        }
    }

    /// Gets an iterator over the keys of the map, in insertion order.
    #[inline]
    pub fn keys(&self) -> Keys<K, V> {
        Keys {
            iter: self.map.keys(),
        }
    }

    /// Gets an iterator over the values of the map, in insertion order.
    #[inline]
    pub fn values(&self) -> Values<K, V> {
        Values {
            iter: self.map.values(),
        }
    }

    /// Gets an iterator over mutable values of the map, in insertion order.
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<K, V> {
        ValuesMut {
            iter: self.map.values_mut(),
        }
    }

    /// Gets an owning iterator over the values of the map, in insertion
    /// order.
    #[inline]
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            iter: self.map.into_values(),
        }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all pairs `(k, v)` such that `f(&k, &mut v)`
    /// returns `false`. The remaining entries keep their relative order.
    #[inline]
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.map.retain(f);
    }

    /// Sorts this map's entries in-place by key.
    ///
    /// This destroys the insertion order in favor of the key type's `Ord`,
    /// taking **O(n log n + c)** time where _n_ is the length of the map and
    /// _c_ is the capacity.
    #[inline]
    pub fn sort_keys(&mut self)
    where
        K: Ord,
    {
        self.map.sort_unstable_keys();
    }
}

#[allow(clippy::derivable_impls)] // clippy bug: https://github.com/rust-lang/rust-clippy/issues/7655
impl<K, V> Default for Map<K, V> {
    #[inline]
    fn default() -> Self {
        Map {
            map: IndexMap::new(),
        }
    }
}

impl<K, V> Clone for Map<K, V>
where
    K: Clone,
    V: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Map {
            map: self.map.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.map.clone_from(&source.map);
    }
}

impl<K, V> PartialEq for Map<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.map.eq(&other.map)
    }
}

impl<K, V> Eq for Map<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

/// Access an element of this map. Panics if the given key is not present in
/// the map.
///
/// ```
/// let mut map = ordered_json::Map::new();
/// map.insert("key".to_owned(), 12);
///
/// assert_eq!(map["key"], 12);
/// ```
impl<K, V, Q> ops::Index<&Q> for Map<K, V>
where
    K: Borrow<Q> + Eq + Hash,
    Q: ?Sized + Eq + Hash,
{
    type Output = V;

    fn index(&self, index: &Q) -> &V {
        self.map.index(index)
    }
}

/// Mutably access an element of this map. Panics if the given key is not
/// present in the map.
///
/// ```
/// let mut map = ordered_json::Map::new();
/// map.insert("key".to_owned(), 12);
///
/// map["key"] = 13;
/// assert_eq!(map["key"], 13);
/// ```
impl<K, V, Q> ops::IndexMut<&Q> for Map<K, V>
where
    K: Borrow<Q> + Eq + Hash,
    Q: ?Sized + Eq + Hash,
{
    fn index_mut(&mut self, index: &Q) -> &mut V {
        self.map.get_mut(index).expect("no entry found for key")
    }
}

impl<K, V> Debug for Map<K, V>
where
    K: Debug,
    V: Debug,
{
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.map.fmt(formatter)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Map<K, V>
where
    K: Eq + Hash,
{
    fn from(arr: [(K, V); N]) -> Self {
        Map {
            map: From::from(arr),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Map<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        Map {
            map: FromIterator::from_iter(iter),
        }
    }
}

impl<K, V> Extend<(K, V)> for Map<K, V>
where
    K: Eq + Hash,
{
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = (K, V)>,
    {
        self.map.extend(iter);
    }
}

macro_rules! delegate_iterator {
    (($name:ident $($generics:tt)*) => $item:ty) => {
        impl $($generics)* Iterator for $name $($generics)* {
            type Item = $item;
            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.iter.next()
            }
            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.iter.size_hint()
            }
        }

        impl $($generics)* DoubleEndedIterator for $name $($generics)* {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.iter.next_back()
            }
        }

        impl $($generics)* ExactSizeIterator for $name $($generics)* {
            #[inline]
            fn len(&self) -> usize {
                self.iter.len()
            }
        }

        impl $($generics)* FusedIterator for $name $($generics)* {}
    }
}

//////////////////////////////////////////////////////////////////////////////

/// A view into a single entry in a map, which may either be vacant or occupied.
/// This enum is constructed from the [`entry`] method on [`Map`].
///
/// [`entry`]: Map::entry
pub enum Entry<'a, K, V> {
    /// A vacant Entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied Entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

/// A vacant Entry. It is part of the [`Entry`] enum.
pub struct VacantEntry<'a, K, V> {
    vacant: indexmap::map::VacantEntry<'a, K, V>,
}

/// An occupied Entry. It is part of the [`Entry`] enum.
pub struct OccupiedEntry<'a, K, V> {
    occupied: indexmap::map::OccupiedEntry<'a, K, V>,
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Returns a reference to this entry's key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: ordered_json::Map<String, i32> = ordered_json::Map::new();
    /// assert_eq!(map.entry("serde").key(), "serde");
    /// ```
    pub fn key(&self) -> &K {
        match self {
            Entry::Vacant(e) => e.key(),
            Entry::Occupied(e) => e.key(),
        }
    }

    /// Ensures a value is in the entry by inserting the default if empty, and
    /// returns a mutable reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: ordered_json::Map<String, i32> = ordered_json::Map::new();
    /// map.entry("serde").or_insert(12);
    ///
    /// assert_eq!(map["serde"], 12);
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Vacant(entry) => entry.insert(default),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the default
    /// function if empty, and returns a mutable reference to the value in the
    /// entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: ordered_json::Map<String, String> = ordered_json::Map::new();
    /// map.entry("serde").or_insert_with(|| "hoho".to_owned());
    ///
    /// assert_eq!(map["serde"], "hoho");
    /// ```
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Vacant(entry) => entry.insert(default()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts into the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: ordered_json::Map<String, &str> = ordered_json::Map::new();
    /// map.entry("serde")
    ///     .and_modify(|e| *e = "rust")
    ///     .or_insert("cpp");
    ///
    /// assert_eq!(map["serde"], "cpp");
    ///
    /// map.entry("serde")
    ///     .and_modify(|e| *e = "rust")
    ///     .or_insert("cpp");
    ///
    /// assert_eq!(map["serde"], "rust");
    /// ```
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting a value
    /// through the VacantEntry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_json::map::Entry;
    ///
    /// let mut map: ordered_json::Map<String, i32> = ordered_json::Map::new();
    ///
    /// match map.entry("serde") {
    ///     Entry::Vacant(vacant) => {
    ///         assert_eq!(vacant.key(), "serde");
    ///     }
    ///     Entry::Occupied(_) => unimplemented!(),
    /// }
    /// ```
    #[inline]
    pub fn key(&self) -> &K {
        self.vacant.key()
    }

    /// Sets the value of the entry with the VacantEntry's key, and returns a
    /// mutable reference to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_json::map::Entry;
    ///
    /// let mut map: ordered_json::Map<String, i32> = ordered_json::Map::new();
    ///
    /// match map.entry("serde") {
    ///     Entry::Vacant(vacant) => {
    ///         vacant.insert(12);
    ///     }
    ///     Entry::Occupied(_) => unimplemented!(),
    /// }
    /// ```
    #[inline]
    pub fn insert(self, value: V) -> &'a mut V {
        self.vacant.insert(value)
    }
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_json::map::Entry;
    ///
    /// let mut map = ordered_json::Map::new();
    /// map.insert("serde".to_owned(), 12);
    ///
    /// match map.entry("serde") {
    ///     Entry::Occupied(occupied) => {
    ///         assert_eq!(occupied.key(), "serde");
    ///     }
    ///     Entry::Vacant(_) => unimplemented!(),
    /// }
    /// ```
    #[inline]
    pub fn key(&self) -> &K {
        self.occupied.key()
    }

    /// Gets a reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_json::map::Entry;
    ///
    /// let mut map = ordered_json::Map::new();
    /// map.insert("serde".to_owned(), 12);
    ///
    /// match map.entry("serde") {
    ///     Entry::Occupied(occupied) => {
    ///         assert_eq!(occupied.get(), &12);
    ///     }
    ///     Entry::Vacant(_) => unimplemented!(),
    /// }
    /// ```
    #[inline]
    pub fn get(&self) -> &V {
        self.occupied.get()
    }

    /// Gets a mutable reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_json::map::Entry;
    ///
    /// let mut map = ordered_json::Map::new();
    /// map.insert("serde".to_owned(), vec![1, 2, 3]);
    ///
    /// match map.entry("serde") {
    ///     Entry::Occupied(mut occupied) => {
    ///         occupied.get_mut().push(4);
    ///     }
    ///     Entry::Vacant(_) => unimplemented!(),
    /// }
    ///
    /// assert_eq!(map["serde"].len(), 4);
    /// ```
    #[inline]
    pub fn get_mut(&mut self) -> &mut V {
        self.occupied.get_mut()
    }

    /// Converts the entry into a mutable reference to its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_json::map::Entry;
    ///
    /// let mut map = ordered_json::Map::new();
    /// map.insert("serde".to_owned(), vec![1, 2, 3]);
    ///
    /// match map.entry("serde") {
    ///     Entry::Occupied(occupied) => {
    ///         occupied.into_mut().push(4);
    ///     }
    ///     Entry::Vacant(_) => unimplemented!(),
    /// }
    ///
    /// assert_eq!(map["serde"].len(), 4);
    /// ```
    #[inline]
    pub fn into_mut(self) -> &'a mut V {
        self.occupied.into_mut()
    }

    /// Sets the value of the entry with the `OccupiedEntry`'s key, and returns
    /// the entry's old value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_json::map::Entry;
    ///
    /// let mut map = ordered_json::Map::new();
    /// map.insert("serde".to_owned(), 12);
    ///
    /// match map.entry("serde") {
    ///     Entry::Occupied(mut occupied) => {
    ///         assert_eq!(occupied.insert(13), 12);
    ///         assert_eq!(occupied.get(), &13);
    ///     }
    ///     Entry::Vacant(_) => unimplemented!(),
    /// }
    /// ```
    #[inline]
    pub fn insert(&mut self, value: V) -> V {
        self.occupied.insert(value)
    }

    /// Takes the value of the entry out of the map, and returns it.
    ///
    /// The entry is removed by shifting all of the entries that follow it,
    /// preserving their relative order, like [`Vec::remove`].
    ///
    /// [`Vec::remove`]: std::vec::Vec::remove
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_json::map::Entry;
    ///
    /// let mut map = ordered_json::Map::new();
    /// map.insert("serde".to_owned(), 12);
    ///
    /// match map.entry("serde") {
    ///     Entry::Occupied(occupied) => {
    ///         assert_eq!(occupied.remove(), 12);
    ///     }
    ///     Entry::Vacant(_) => unimplemented!(),
    /// }
    /// ```
    #[inline]
    pub fn remove(self) -> V {
        self.occupied.shift_remove()
    }

    /// Takes the value of the entry out of the map, and returns it.
    ///
    /// Like [`Vec::swap_remove`], the entry is removed by swapping it with the
    /// last element of the map and popping it off. This perturbs the position
    /// of what used to be the last element!
    ///
    /// [`Vec::swap_remove`]: std::vec::Vec::swap_remove
    #[inline]
    pub fn swap_remove(self) -> V {
        self.occupied.swap_remove()
    }

    /// Removes the entry from the map, returning the stored key and value.
    ///
    /// The entry is removed by shifting all of the entries that follow it,
    /// preserving their relative order, like [`Vec::remove`].
    ///
    /// [`Vec::remove`]: std::vec::Vec::remove
    #[inline]
    pub fn remove_entry(self) -> (K, V) {
        self.occupied.shift_remove_entry()
    }

    /// Removes the entry from the map, returning the stored key and value.
    ///
    /// Like [`Vec::swap_remove`], the entry is removed by swapping it with the
    /// last element of the map and popping it off. This perturbs the position
    /// of what used to be the last element!
    ///
    /// [`Vec::swap_remove`]: std::vec::Vec::swap_remove
    #[inline]
    pub fn swap_remove_entry(self) -> (K, V) {
        self.occupied.swap_remove_entry()
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter {
            iter: self.map.iter(),
        }
    }
}

/// An iterator over an ordered_json::Map's entries.
pub struct Iter<'a, K, V> {
    iter: indexmap::map::Iter<'a, K, V>,
}

delegate_iterator!((Iter<'a, K, V>) => (&'a K, &'a V));

//////////////////////////////////////////////////////////////////////////////

impl<'a, K, V> IntoIterator for &'a mut Map<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            iter: self.map.iter_mut(),
        }
    }
}

/// A mutable iterator over an ordered_json::Map's entries.
pub struct IterMut<'a, K, V> {
    iter: indexmap::map::IterMut<'a, K, V>,
}

delegate_iterator!((IterMut<'a, K, V>) => (&'a K, &'a mut V));

//////////////////////////////////////////////////////////////////////////////

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.map.into_iter(),
        }
    }
}

/// An owning iterator over an ordered_json::Map's entries.
pub struct IntoIter<K, V> {
    iter: indexmap::map::IntoIter<K, V>,
}

delegate_iterator!((IntoIter<K, V>) => (K, V));

//////////////////////////////////////////////////////////////////////////////

/// An iterator over an ordered_json::Map's keys.
pub struct Keys<'a, K, V> {
    iter: indexmap::map::Keys<'a, K, V>,
}

delegate_iterator!((Keys<'a, K, V>) => &'a K);

//////////////////////////////////////////////////////////////////////////////

/// An iterator over an ordered_json::Map's values.
pub struct Values<'a, K, V> {
    iter: indexmap::map::Values<'a, K, V>,
}

delegate_iterator!((Values<'a, K, V>) => &'a V);

//////////////////////////////////////////////////////////////////////////////

/// A mutable iterator over an ordered_json::Map's values.
pub struct ValuesMut<'a, K, V> {
    iter: indexmap::map::ValuesMut<'a, K, V>,
}

delegate_iterator!((ValuesMut<'a, K, V>) => &'a mut V);

//////////////////////////////////////////////////////////////////////////////

/// An owning iterator over an ordered_json::Map's values.
pub struct IntoValues<K, V> {
    iter: indexmap::map::IntoValues<K, V>,
}

delegate_iterator!((IntoValues<K, V>) => V);
