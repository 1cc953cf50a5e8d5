type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    next: Link<T>,
    value: T,
}

/*
 * Singly linked list : the list owns the head, every node owns its successor.
 */
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node.value
        })
    }

    /*
     * Walk from the head and link <value> in front of the first node
     * for which <goes_before> holds. Appends at the tail if none does.
     * Returns the position the value was linked at.
     */
    pub fn insert_before<F>(&mut self, value: T, mut goes_before: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut position = 0;
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|node| !goes_before(&node.value))
        {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
            position += 1;
        }

        let next = cursor.take();
        *cursor = Some(Box::new(Node { next, value }));
        self.len += 1;
        position
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/*
 * Unlink node by node, the default drop would recurse once per node
 */
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_before_first_match() {
        let mut list = LinkedList::new();
        assert_eq!(list.insert_before(3, |_| false), 0);
        assert_eq!(list.insert_before(7, |_| false), 1);
        // In front of the first value >= 5
        assert_eq!(list.insert_before(5, |v| *v >= 5), 1);
        assert_eq!(list.insert_before(1, |_| true), 0);

        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn pop_front() {
        let mut list = LinkedList::new();
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());

        list.insert_before("a", |_| false);
        list.insert_before("b", |_| false);
        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_front(), Some("b"));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn drop_long_chain() {
        let mut list = LinkedList::new();
        for i in 0..200_000 {
            list.insert_before(i, |_| true);
        }
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
