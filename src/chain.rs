//! Chain: singly-linked overflow list for keys that collide on a slot.
//!
//! Nodes are stored in a `SlotMap` arena owned by the table and linked by
//! arena keys, so unlinking a node and freeing it are the same operation and
//! no node can outlive the table. A `Chain` itself only records its head and
//! length; every method takes the arena it lives in.

use crate::entry::Entry;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Arena key of a chain node.
    pub(crate) struct NodeKey;
}

#[derive(Debug)]
pub(crate) struct Node {
    entry: Entry,
    next: Option<NodeKey>,
}

/// Node storage shared by all chains of one table.
pub(crate) type Nodes = SlotMap<NodeKey, Node>;

#[derive(Debug, Default)]
pub(crate) struct Chain {
    head: Option<NodeKey>,
    len: usize,
}

impl Chain {
    pub(crate) const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Link `entry` as the new tail. Walks the chain, so O(len).
    pub(crate) fn append(&mut self, nodes: &mut Nodes, entry: Entry) {
        let new = nodes.insert(Node { entry, next: None });
        match self.head {
            None => self.head = Some(new),
            Some(mut tail) => {
                while let Some(next) = nodes[tail].next {
                    tail = next;
                }
                nodes[tail].next = Some(new);
            }
        }
        self.len += 1;
    }

    fn position(&self, nodes: &Nodes, key: &str) -> Option<NodeKey> {
        let mut cur = self.head;
        while let Some(k) = cur {
            let node = &nodes[k];
            if node.entry.matches(key) {
                return Some(k);
            }
            cur = node.next;
        }
        None
    }

    /// First entry whose key equals `key`, scanning every node in order.
    pub(crate) fn find<'a>(&self, nodes: &'a Nodes, key: &str) -> Option<&'a Entry> {
        self.iter(nodes).find(|e| e.matches(key))
    }

    pub(crate) fn find_mut<'a>(&self, nodes: &'a mut Nodes, key: &str) -> Option<&'a mut Entry> {
        let k = self.position(nodes, key)?;
        nodes.get_mut(k).map(|n| &mut n.entry)
    }

    /// Unlink and free the node holding `key`, relinking its predecessor to
    /// its successor.
    pub(crate) fn remove(&mut self, nodes: &mut Nodes, key: &str) -> Option<Entry> {
        let mut prev: Option<NodeKey> = None;
        let mut cur = self.head;
        while let Some(k) = cur {
            let (hit, next) = {
                let node = &nodes[k];
                (node.entry.matches(key), node.next)
            };
            if hit {
                match prev {
                    None => self.head = next,
                    Some(p) => nodes[p].next = next,
                }
                self.len -= 1;
                return nodes.remove(k).map(|n| n.entry);
            }
            prev = Some(k);
            cur = next;
        }
        None
    }

    /// Unlink and free the head node, handing its entry to the caller.
    pub(crate) fn pop_front(&mut self, nodes: &mut Nodes) -> Option<Entry> {
        let head = self.head?;
        let node = nodes.remove(head)?;
        self.head = node.next;
        self.len -= 1;
        Some(node.entry)
    }

    pub(crate) fn clear(&mut self, nodes: &mut Nodes) {
        let mut cur = self.head.take();
        while let Some(k) = cur {
            cur = nodes.remove(k).and_then(|n| n.next);
        }
        self.len = 0;
    }

    pub(crate) fn iter<'a>(&self, nodes: &'a Nodes) -> Iter<'a> {
        Iter {
            nodes,
            cur: self.head,
        }
    }
}

/// In-order iterator over the entries of one chain.
pub(crate) struct Iter<'a> {
    nodes: &'a Nodes,
    cur: Option<NodeKey>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cur?)?;
        self.cur = node.next;
        Some(&node.entry)
    }
}
