//! Shared fixtures: an explicit game tree usable as a `Board`, and
//! call-counting clocks.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rust_gametree::core::{Move, MoveList, PlayerId};
use rust_gametree::rules::Board;

/// Shape of a synthetic game tree.
///
/// Every node carries a value from the first player's point of view; the
/// value is what the evaluator reports when a search stops at that node.
pub enum Spec {
    Leaf(f64),
    Node(f64, Vec<Spec>),
}

pub fn leaf(value: f64) -> Spec {
    Spec::Leaf(value)
}

pub fn node(value: f64, children: Vec<Spec>) -> Spec {
    Spec::Node(value, children)
}

struct TreeNode {
    value: f64,
    children: Vec<usize>,
}

/// Position inside an explicit game tree. The first player moves at the root.
///
/// Moves are `Move::new(0, child_node_id)`. Only the side to move has moves.
/// Every position forecast from the same root shares one move-generation
/// counter.
#[derive(Clone)]
pub struct TreeBoard {
    nodes: Rc<Vec<TreeNode>>,
    node: usize,
    active: PlayerId,
    generations: Rc<Cell<usize>>,
}

impl TreeBoard {
    pub fn build(spec: Spec) -> Self {
        fn push(spec: Spec, nodes: &mut Vec<TreeNode>) -> usize {
            let id = nodes.len();
            match spec {
                Spec::Leaf(value) => nodes.push(TreeNode {
                    value,
                    children: Vec::new(),
                }),
                Spec::Node(value, children) => {
                    nodes.push(TreeNode {
                        value,
                        children: Vec::new(),
                    });
                    let ids: Vec<usize> = children.into_iter().map(|c| push(c, nodes)).collect();
                    nodes[id].children = ids;
                }
            }
            id
        }

        let mut nodes = Vec::new();
        push(spec, &mut nodes);
        Self {
            nodes: Rc::new(nodes),
            node: 0,
            active: PlayerId::FIRST,
            generations: Rc::new(Cell::new(0)),
        }
    }

    /// Calls to `legal_moves_for` across the whole tree so far.
    pub fn move_generations(&self) -> usize {
        self.generations.get()
    }

    pub fn node(&self) -> usize {
        self.node
    }

    pub fn value(&self) -> f64 {
        self.nodes[self.node].value
    }

    /// The move leading to the `index`-th child of the current node.
    pub fn child_move(&self, index: usize) -> Move {
        Move::new(0, self.nodes[self.node].children[index] as i32)
    }
}

impl Board for TreeBoard {
    fn active_player(&self) -> PlayerId {
        self.active
    }

    fn legal_moves_for(&self, player: PlayerId) -> MoveList {
        self.generations.set(self.generations.get() + 1);
        if player != self.active {
            return MoveList::new();
        }
        self.nodes[self.node]
            .children
            .iter()
            .map(|&id| Move::new(0, id as i32))
            .collect()
    }

    fn forecast_move(&self, mv: Move) -> Self {
        Self {
            nodes: Rc::clone(&self.nodes),
            node: mv.col as usize,
            active: self.active.opponent(),
            generations: Rc::clone(&self.generations),
        }
    }
}

/// Node value as seen by `player` (zero-sum).
pub fn tree_value(board: &TreeBoard, player: PlayerId) -> f64 {
    if player == PlayerId::FIRST {
        board.value()
    } else {
        -board.value()
    }
}

/// Log of `(node, perspective)` pairs passed to the evaluator.
pub type EvalLog = Rc<RefCell<Vec<(usize, PlayerId)>>>;

/// `tree_value` that also records every call.
pub fn recording_evaluator() -> (impl Fn(&TreeBoard, PlayerId) -> f64, EvalLog) {
    let log: EvalLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let evaluator = move |board: &TreeBoard, player: PlayerId| {
        sink.borrow_mut().push((board.node(), player));
        tree_value(board, player)
    };
    (evaluator, log)
}

/// Clock with plenty of time for the first `calls` queries, then none.
pub fn expires_after(calls: u32) -> impl Fn() -> f64 {
    let count = Cell::new(0u32);
    move || {
        count.set(count.get() + 1);
        if count.get() <= calls {
            1_000.0
        } else {
            0.0
        }
    }
}

pub fn no_clock() -> f64 {
    f64::INFINITY
}
