// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backward navigation.
//!
//! Builds a three-coordinator tree with a deep link, then unwinds: first to a
//! screen buried in the root's stack, then all the way back to the first
//! screen of the tree.
//!
//! Run:
//! - `cargo run -p wayfind_demos --example unwind`

use wayfind_coordinator::CoordinatorTree;
use wayfind_flow::{Flow, Request, Screen};

#[derive(Clone, Debug, PartialEq)]
enum Page {
    Inbox,
    Thread,
    Compose,
    Attachments,
}

impl Screen for Page {
    type Id = &'static str;
    fn id(&self) -> &'static str {
        match self {
            Page::Inbox => "inbox",
            Page::Thread => "thread",
            Page::Compose => "compose",
            Page::Attachments => "attachments",
        }
    }
}

fn main() {
    let mut tree: CoordinatorTree<Page> = CoordinatorTree::new();
    let root = tree.insert_root();

    let flow: Flow<Page> = vec![
        Request::push(Page::Inbox),
        Request::push(Page::Thread),
        Request::sheet(Page::Compose),
        Request::push(Page::Attachments),
    ]
    .into();
    tree.navigate_flow(root, flow, None);
    let remainder = tree.sheet(root).and_then(|p| p.remaining().cloned());
    let child = tree.next_coordinator(root, remainder);
    tree.settle();

    println!("before: root stack depth {}, sheet up, child stack depth {}",
        tree.stack(root).len(),
        tree.stack(child).len(),
    );

    // Unwind from inside the sheet content to a screen in the root's stack.
    // The sheet comes down first; the pop chains one transition later.
    tree.unwind_to(
        child,
        Page::Inbox,
        Some(Box::new(|r| println!("unwind_to(Inbox): {r:?}"))),
    );
    tree.settle();
    println!(
        "after unwind: root stack {:?}, presenting: {}",
        tree.stack(root).iter().map(|r| &r.screen).collect::<Vec<_>>(),
        tree.is_presenting(root),
    );

    tree.navigate_to(root, Page::Thread);
    tree.unwind_to_root(
        root,
        Some(Box::new(|r| println!("unwind_to_root: {r:?}"))),
    );
    tree.settle();
    println!(
        "after unwind_to_root: root stack {:?}",
        tree.stack(root).iter().map(|r| &r.screen).collect::<Vec<_>>(),
    );
}
