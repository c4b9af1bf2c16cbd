use crate::types::Node;

/// Ordered node: a key plus the height of the subtree it roots.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub key: K,
    /// `1 + max(child heights)`; 1 for a leaf, 0 stands for a missing child.
    pub height: i32,
    pub l: Option<u32>,
    pub r: Option<u32>,
}

impl<K> AvlNode<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            height: 1,
            l: None,
            r: None,
        }
    }
}

impl<K> Node for AvlNode<K> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
