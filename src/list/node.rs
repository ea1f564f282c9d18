use std::mem::MaybeUninit;
use std::ptr::NonNull;

/// A heap cell of the list.
///
/// `next` and `prev` are non-owning links; a node is owned by the chain that
/// reaches it. The ghost node shares this layout but its `element` is never
/// initialized (see [`new_ghost`]).
///
/// All link accesses go through raw place expressions instead of `&Node<T>`,
/// so that they stay valid on the ghost node.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

impl<T> Node<T> {
    /// Allocate a node holding `element` that links to itself.
    pub(crate) fn new_singleton(element: T) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        });
        let node = NonNull::from(Box::leak(node));
        // SAFETY: `node` was just leaked from a box, so it is valid and unaliased.
        unsafe { Self::link(node, node) };
        node
    }

    /// Allocate a node holding `element` between `prev` and `next`, and
    /// rewire both neighbours to it.
    ///
    /// The element is moved into the cell before any link is touched, so the
    /// neighbours are either untouched or fully rewired.
    ///
    /// # Safety
    ///
    /// `prev` and `next` must be valid, adjacent nodes of the same chain.
    pub(crate) unsafe fn new_between(
        element: T,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
    ) -> NonNull<Node<T>> {
        let node = NonNull::from(Box::leak(Box::new(Node {
            next,
            prev,
            element,
        })));
        Self::link(prev, node);
        Self::link(node, next);
        node
    }

    /// Unlink `node` from its neighbours, free it and return its element.
    ///
    /// # Safety
    ///
    /// `node` must be a valid non-ghost node created by this module, and it
    /// must not be used afterwards.
    pub(crate) unsafe fn unlink(node: NonNull<Node<T>>) -> T {
        Self::link(Self::prev_of(node), Self::next_of(node));
        Box::from_raw(node.as_ptr()).element
    }

    /// Make `second` follow `first`.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid nodes (the ghost node included).
    pub(crate) unsafe fn link(first: NonNull<Node<T>>, second: NonNull<Node<T>>) {
        (*first.as_ptr()).next = second;
        (*second.as_ptr()).prev = first;
    }

    /// # Safety
    ///
    /// `node` must be valid (the ghost node included).
    #[inline]
    pub(crate) unsafe fn next_of(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        (*node.as_ptr()).next
    }

    /// # Safety
    ///
    /// `node` must be valid (the ghost node included).
    #[inline]
    pub(crate) unsafe fn prev_of(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        (*node.as_ptr()).prev
    }
}

/// Allocate the ghost node of a list: a singleton whose element slot stays
/// uninitialized.
///
/// `MaybeUninit<T>` has the layout of `T` and `Node` is `#[repr(C)]`, so the
/// cast keeps `next` and `prev` where `Node<T>` expects them.
pub(crate) fn new_ghost<T>() -> NonNull<Node<T>> {
    Node::<MaybeUninit<T>>::new_singleton(MaybeUninit::uninit()).cast()
}

/// Free a ghost node without touching its element slot.
///
/// # Safety
///
/// `ghost` must come from [`new_ghost`] and must not be used afterwards.
pub(crate) unsafe fn release_ghost<T>(ghost: NonNull<Node<T>>) {
    drop(Box::from_raw(ghost.cast::<Node<MaybeUninit<T>>>().as_ptr()));
}

#[cfg(debug_assertions)]
pub(crate) fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(Node::next_of(prev), next);
        assert_eq!(Node::prev_of(next), prev);
    }
}
