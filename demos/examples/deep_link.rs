// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deep link across coordinators.
//!
//! A five-step flow threads through three coordinators: each overlay's
//! remainder becomes the flow of the child coordinator the view layer creates
//! for the overlay content, re-entering partitioning one level down.
//!
//! Run:
//! - `cargo run -p wayfind_demos --example deep_link`

use wayfind_coordinator::{CoordinatorId, CoordinatorTree};
use wayfind_flow::{Flow, Request, Screen};

#[derive(Clone, Debug, PartialEq)]
enum Page {
    Catalog,
    Cart,
    Checkout,
    Payment,
    Receipt,
}

impl Screen for Page {
    type Id = &'static str;
    fn id(&self) -> &'static str {
        match self {
            Page::Catalog => "catalog",
            Page::Cart => "cart",
            Page::Checkout => "checkout",
            Page::Payment => "payment",
            Page::Receipt => "receipt",
        }
    }
}

fn describe(tree: &CoordinatorTree<Page>, label: &str, id: CoordinatorId) {
    println!("== {label} ==");
    let screens: Vec<_> = tree.stack(id).iter().map(|r| &r.screen).collect();
    println!("  stack: {screens:?}");
    if let Some(sheet) = tree.sheet(id) {
        println!("  sheet: {:?}", sheet.request().screen);
    }
    if let Some(modal) = tree.modal(id) {
        println!("  modal: {:?}", modal.request().screen);
    }
}

fn main() {
    let mut tree: CoordinatorTree<Page> = CoordinatorTree::new();
    let root = tree.insert_root();

    let flow: Flow<Page> = vec![
        Request::push(Page::Catalog),
        Request::sheet(Page::Cart),
        Request::modal(Page::Checkout),
        Request::push(Page::Payment),
        Request::push(Page::Receipt),
    ]
    .into();
    tree.navigate_flow(root, flow, None);

    // The view layer instantiates each overlay's content and hands the
    // remainder to the coordinator that will own it.
    let remainder = tree.sheet(root).and_then(|p| p.remaining().cloned());
    let child = tree.next_coordinator(root, remainder);
    tree.settle();

    let remainder = tree.modal(child).and_then(|p| p.remaining().cloned());
    let grandchild = tree.next_coordinator(child, remainder);
    tree.settle();

    describe(&tree, "root", root);
    describe(&tree, "child (sheet content)", child);
    describe(&tree, "grandchild (modal content)", grandchild);
    println!(
        "root_of(grandchild) == root: {}",
        tree.root_of(grandchild) == Some(root)
    );
}
