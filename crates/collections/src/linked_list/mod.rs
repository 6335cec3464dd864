use crate::boxnode;

/// Singly linked list of key/value nodes, used as the bucket
/// type of [`ChainedMap`](crate::ChainedMap).
///
/// New nodes go to the front, so iteration yields the most
/// recently inserted node first.
pub struct List<V> {
    head: Option<Box<Node<V>>>,
    len: usize,
}

impl<V> List<V> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts a node at the front of the list
    pub fn push<S: Into<String>>(&mut self, key: S, value: V) {
        self.push_boxed(boxnode!(key, value));
    }

    fn push_boxed(&mut self, mut boxed: Box<Node<V>>) {
        boxed.next = self.head.take();
        self.head = Some(boxed);
        self.len += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Node<V>> {
        match self.head.take() {
            None => None,
            Some(mut node) => {
                self.head = node.next.take();
                self.len -= 1;
                Some(*node)
            }
        }
    }

    /// Returns the first node holding `key`, if any
    pub fn contains(&self, key: &str) -> Option<&Node<V>> {
        self.iter().find(|node| node.key == key)
    }

    /// Unlinks the first node holding `key` and hands it back
    pub fn remove(&mut self, key: &str) -> Option<Node<V>> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.key != key) {
            link = &mut link.as_mut()?.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;

        Some(*removed)
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }
}

impl<V> Default for List<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for List<V> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            // node goes out of scope here, calling drop
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for List<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<V> IntoIterator for List<V> {
    type Item = <IterOwn<V> as Iterator>::Item;
    type IntoIter = IterOwn<V>;

    fn into_iter(self) -> Self::IntoIter {
        IterOwn::new(self)
    }
}

impl<'a, V> IntoIterator for &'a List<V> {
    type Item = &'a Node<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Node<V> {
    pub(crate) key: String,
    pub(crate) value: V,
    pub(crate) next: Option<Box<Node<V>>>,
}

impl<V> Node<V> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_pair(self) -> (String, V) {
        (self.key, self.value)
    }
}

impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}
impl<V: Eq> Eq for Node<V> {}

impl<V: std::fmt::Debug> std::fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {:?}>", self.key, self.value)
    }
}

// [iterators]

#[derive(Debug)]
pub struct Iter<'a, V> {
    current: Option<&'a Node<V>>,
    len: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Node<V>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.current.take() {
            None => None,
            Some(node) => {
                self.current = node.next.as_deref();
                self.len -= 1;
                Some(node)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, V> Iter<'a, V> {
    pub fn new(list: &'a List<V>) -> Self {
        Self {
            current: list.head.as_deref(),
            len: list.len,
        }
    }
}

pub struct IterOwn<V>(List<V>);

impl<V> Iterator for IterOwn<V> {
    type Item = Node<V>;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<V> IterOwn<V> {
    pub fn new(list: List<V>) -> Self {
        Self(list)
    }
}
