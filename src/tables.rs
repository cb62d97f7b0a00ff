//! The four admissible distance tables that drive the pattern-database
//! heuristic (`crate::heuristic`).
//!
//! `edge_dist`/`corner_dist` answer: with a specific slot currently
//! showing some byte, how many quarter turns until that slot is solved?
//! They're built by a single breadth-first search outward from the solved
//! cube (pruned by the same canonical tree `crate::move_tree` hands the
//! main search), recording, for every slot and every byte value seen
//! there, the first (shallowest) depth at which it appeared. Because the
//! search starts from solved and only ever records what it actually
//! reaches, "first depth seen" is a true shortest-path distance — and
//! since it throws away every slot's value but one, it's a strict
//! relaxation of full-cube distance, hence admissible.
//!
//! `pair0_dist` and `quad01_dist` need a joint property of two slots at
//! once, so a single from-solved search would have to run arbitrarily
//! deep before covering every combination. Instead they're built the way
//! the corpus's offline table generator built its own composite tables:
//! construct the displaced starting position directly (only the tracked
//! slots disturbed), then search for the shortest path back to solved,
//! pruned by the single-slot tables above. `pair0_dist` (1024 entries) is
//! cheap enough to build eagerly too. `quad01_dist` has 32^4 (~1M)
//! entries; building it eagerly at startup the way the generator tool
//! does offline would make every process start pay for entries most
//! searches never touch. Instead we memoize it lazily, one key at a
//! time, the first time `heuristic` asks for it — see `DESIGN.md` for
//! the tradeoff.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

use ahash::HashMap;

use crate::move_tree::tree;
use crate::state::{Cube, CORNER_PERM_MASK, EDGE_PERM_MASK};

fn cube_key(c: &Cube) -> u128 {
    let mut key = 0u128;
    for &b in c.edge_bytes() {
        key = (key << 5) | b as u128;
    }
    for &b in c.corner_bytes() {
        key = (key << 5) | b as u128;
    }
    key
}

/// Every slot's byte value, keyed as `(slot << 5) | byte`, the first
/// depth each was observed at in a single from-solved search.
struct SlotTables {
    edges: HashMap<u16, i8>,
    corners: HashMap<u16, i8>,
}

fn record(edges: &mut HashMap<u16, i8>, corners: &mut HashMap<u16, i8>, c: &Cube, depth: i8) {
    for slot in 0..12u16 {
        edges
            .entry((slot << 5) | c.edge(slot as usize) as u16)
            .or_insert(depth);
    }
    for slot in 0..8u16 {
        corners
            .entry((slot << 5) | c.corner(slot as usize) as u16)
            .or_insert(depth);
    }
}

fn build_slot_tables(max_depth: i32) -> SlotTables {
    let mut edges = HashMap::default();
    let mut corners = HashMap::default();
    let mut seen_states: HashSet<u128> = HashSet::new();

    let start = Cube::SOLVED;
    seen_states.insert(cube_key(&start));
    record(&mut edges, &mut corners, &start, 0);

    let t = tree();
    let mut frontier: Vec<(Cube, usize)> = t
        .roots()
        .iter()
        .map(|&root| (start.compose(&t.node(root).mv.cube()), root))
        .collect();

    let mut depth = 1;
    while !frontier.is_empty() && depth <= max_depth {
        let mut next_frontier = Vec::new();
        for (cube, node_idx) in frontier {
            if !seen_states.insert(cube_key(&cube)) {
                continue;
            }
            record(&mut edges, &mut corners, &cube, depth as i8);
            for &child_idx in &t.node(node_idx).children {
                let child_mv = t.node(child_idx).mv;
                next_frontier.push((cube.compose(&child_mv.cube()), child_idx));
            }
        }
        frontier = next_frontier;
        depth += 1;
    }
    #[cfg(feature = "table_stats")]
    {
        print_stats("edge_dist", edges.values().copied());
        print_stats("corner_dist", corners.values().copied());
    }
    SlotTables { edges, corners }
}

/// Prints min/max/mean distance and the unreachable (`-1`) count for a
/// table under construction. Only compiled in with `--features table_stats`.
#[cfg(feature = "table_stats")]
fn print_stats(name: &str, values: impl Iterator<Item = i8>) {
    let mut min = i8::MAX;
    let mut max = i8::MIN;
    let mut sum = 0i64;
    let mut count = 0i64;
    let mut unreachable = 0i64;
    for v in values {
        if v < 0 {
            unreachable += 1;
            continue;
        }
        min = min.min(v);
        max = max.max(v);
        sum += v as i64;
        count += 1;
    }
    let mean = if count > 0 { sum as f64 / count as f64 } else { 0.0 };
    println!(
        "[table_stats] {name}: min={min} max={max} mean={mean:.3} unreachable={unreachable} total={}",
        count + unreachable
    );
}

static SLOT_TABLES: OnceLock<SlotTables> = OnceLock::new();

fn slot_tables() -> &'static SlotTables {
    SLOT_TABLES.get_or_init(|| build_slot_tables(6))
}

/// Shortest quarter-turn distance for the slot identified by `to` (a
/// plain, unflipped identity byte — its low bits name the slot) to go
/// from currently showing `from` to showing `to` (home), or -1 if that
/// wasn't observed within the search's depth cap.
pub fn edge_dist(from: u8, to: u8) -> i32 {
    let slot = (to & EDGE_PERM_MASK) as u16;
    slot_tables()
        .edges
        .get(&((slot << 5) | from as u16))
        .copied()
        .unwrap_or(-1) as i32
}

pub fn corner_dist(from: u8, to: u8) -> i32 {
    let slot = (to & CORNER_PERM_MASK) as u16;
    slot_tables()
        .corners
        .get(&((slot << 5) | from as u16))
        .copied()
        .unwrap_or(-1) as i32
}

/// Builds a cube that is solved except edge-identity 0 has been displaced
/// to `byte` (the cubie previously at that slot swaps into slot 0).
fn displaced_edge(byte: u8) -> [u8; 12] {
    let mut edges = [0u8; 12];
    for (i, e) in edges.iter_mut().enumerate() {
        *e = i as u8;
    }
    let target_slot = (byte & EDGE_PERM_MASK) as usize;
    edges[0] = byte;
    if target_slot != 0 {
        edges[target_slot] = 0;
    }
    edges
}

fn displaced_corner(byte: u8) -> [u8; 8] {
    let mut corners = [0u8; 8];
    for (i, c) in corners.iter_mut().enumerate() {
        *c = i as u8;
    }
    let target_slot = (byte & CORNER_PERM_MASK) as usize;
    corners[0] = byte;
    if target_slot != 0 {
        corners[target_slot] = 0;
    }
    corners
}

/// Depth-first bounded search for the shortest path from `start` to a
/// state satisfying `goal`, pruned by `lower_bound`. Used only by table
/// construction, over the full 12 quarter turns with no-undo pruning
/// only (no cross-axis canonicalization): `pair0_dist`/`quad01_dist` are
/// true Cayley-graph distances for the displaced starting position.
fn shortest_depth(
    start: Cube,
    goal: impl Fn(&Cube) -> bool,
    lower_bound: impl Fn(&Cube) -> i32,
    max_depth: i32,
) -> Option<i32> {
    if goal(&start) {
        return Some(0);
    }
    for depth in 1..=max_depth {
        if dfs(start, depth, None, &goal, &lower_bound) {
            return Some(depth);
        }
    }
    None
}

fn dfs(
    pos: Cube,
    remaining: i32,
    prev: Option<crate::moves::Move>,
    goal: &impl Fn(&Cube) -> bool,
    lower_bound: &impl Fn(&Cube) -> i32,
) -> bool {
    if goal(&pos) {
        return true;
    }
    if remaining == 0 {
        return false;
    }
    if lower_bound(&pos) > remaining {
        return false;
    }
    for mv in crate::moves::QUARTER_MOVES {
        if let Some(p) = prev {
            use crate::moves::CanReverse;
            if mv.face == p.face && mv.turn == p.reverse().turn {
                continue;
            }
        }
        let next = pos.compose(&mv.cube());
        if dfs(next, remaining - 1, Some(mv), goal, lower_bound) {
            return true;
        }
    }
    false
}

fn pair0_goal(pos: &Cube) -> bool {
    pos.edge(0) == 0 && pos.corner(0) == 0
}

fn pair0_bound(pos: &Cube) -> i32 {
    edge_dist(pos.edge(0), 0).max(corner_dist(pos.corner(0), 0))
}

fn build_pair0_dist() -> HashMap<u16, i8> {
    let mut out = HashMap::default();
    for e0 in 0..32u8 {
        for c0 in 0..32u8 {
            let edges = displaced_edge(e0);
            let corners = displaced_corner(c0);
            // `displaced_edge`/`displaced_corner` build a cube whose slot 0
            // *shows* the given byte, i.e. slot occupancy. The table is
            // keyed by cubie identity (where the piece *is*, not what's
            // sitting in slot 0), so the search has to start from the
            // inverse of that cube, matching how `pair0_dist` is queried.
            let start = Cube::from_arrays(edges, corners).invert();
            let key = pair0_key(e0, c0);
            let depth = shortest_depth(start, pair0_goal, pair0_bound, 12);
            out.insert(key, depth.map(|d| d as i8).unwrap_or(-1));
        }
    }
    #[cfg(feature = "table_stats")]
    print_stats("pair0_dist", out.values().copied());
    out
}

fn pair0_key(e0: u8, c0: u8) -> u16 {
    ((e0 as u16) << 5) | c0 as u16
}

static PAIR0_DIST: OnceLock<HashMap<u16, i8>> = OnceLock::new();

/// Quarter-turn distance to bring edge-slot 0 and corner-slot 0 home
/// simultaneously, given the bytes currently occupying those slots.
pub fn pair0_dist(e0: u8, c0: u8) -> i32 {
    let table = PAIR0_DIST.get_or_init(build_pair0_dist);
    table.get(&pair0_key(e0, c0)).copied().unwrap_or(-1) as i32
}

fn quad01_key(e0: u8, e1: u8, c0: u8, c1: u8) -> u32 {
    ((e0 as u32) << 15) | ((e1 as u32) << 10) | ((c0 as u32) << 5) | c1 as u32
}

/// Places `target` identity at `slot` in `arr` by swapping it in from
/// wherever it currently sits, preserving bijectivity (a swap of any two
/// positions in a permutation is itself a permutation). `arr` holds bare
/// identities, never orientation-tagged bytes.
fn place(arr: &mut [u8], slot: usize, target: u8) {
    if arr[slot] == target {
        return;
    }
    let from = arr.iter().position(|&x| x == target).unwrap();
    arr.swap(slot, from);
}

/// Builds a cube solved except edge-slots {0,1} and corner-slots {0,1}
/// have been forced to the given bytes. The other ten edges and six
/// corners are left in a consistent, arbitrary completion of the
/// permutation (their exact placement doesn't affect admissibility: the
/// bound and goal this table supports only ever inspect slots 0 and 1).
fn displaced_quad(e0: u8, e1: u8, c0: u8, c1: u8) -> Option<Cube> {
    let e0_id = e0 & EDGE_PERM_MASK;
    let e1_id = e1 & EDGE_PERM_MASK;
    if e0_id == e1_id {
        return None;
    }
    let mut edge_ids: [u8; 12] = std::array::from_fn(|i| i as u8);
    place(&mut edge_ids, 0, e0_id);
    place(&mut edge_ids, 1, e1_id);
    let mut edges: [u8; 12] = edge_ids;
    edges[0] = e0;
    edges[1] = e1;

    let c0_id = c0 & CORNER_PERM_MASK;
    let c1_id = c1 & CORNER_PERM_MASK;
    if c0_id == c1_id {
        return None;
    }
    let mut corner_ids: [u8; 8] = std::array::from_fn(|i| i as u8);
    place(&mut corner_ids, 0, c0_id);
    place(&mut corner_ids, 1, c1_id);
    let mut corners: [u8; 8] = corner_ids;
    corners[0] = c0;
    corners[1] = c1;

    Some(Cube::from_arrays(edges, corners))
}

fn quad01_goal(pos: &Cube) -> bool {
    pos.edge(0) == 0 && pos.edge(1) == 1 && pos.corner(0) == 0 && pos.corner(1) == 1
}

fn quad01_bound(pos: &Cube) -> i32 {
    // `pair0_dist` is itself a two-slot joint table, keyed the same
    // cubie-identity way `quad01_dist` is (see `build_pair0_dist`), so a
    // live search position has to be inverted before querying it. The two
    // `edge_dist`/`corner_dist` terms are single-slot and self-dual under
    // inversion (see the comment on `heuristic::quad01_bound`), so those
    // stay keyed on `pos` directly.
    let inv = pos.invert();
    pair0_dist(inv.edge(0), inv.corner(0))
        .max(edge_dist(pos.edge(1), 1))
        .max(corner_dist(pos.corner(1), 1))
}

/// Ground-truth cross-check for `quad01_dist`: searches directly from
/// `pos.invert()` for a path of at most `max_depth` moves to the quad01
/// goal, instead of reading the memoized table. Used only by
/// `heuristic::lower_bound`'s `debug_assert_eq!` to catch a table/query
/// convention mismatch (e.g. a missing or extra inversion) the moment it's
/// introduced, rather than as a silent inadmissible bound.
pub fn prefix_search_dist(pos: &Cube, max_depth: i32) -> i32 {
    shortest_depth(pos.invert(), quad01_goal, quad01_bound, max_depth)
        .map(|d| d as i32)
        .unwrap_or(-1)
}

static QUAD01_CACHE: OnceLock<Mutex<HashMap<u32, i8>>> = OnceLock::new();

/// Quarter-turn distance to bring edge-slots {0,1} and corner-slots {0,1}
/// all home simultaneously. Computed and memoized lazily: see the module
/// doc comment for why this table isn't built eagerly like the other
/// three.
pub fn quad01_dist(e0: u8, e1: u8, c0: u8, c1: u8) -> i32 {
    let key = quad01_key(e0, e1, c0, c1);
    let cache = QUAD01_CACHE.get_or_init(|| Mutex::new(HashMap::default()));
    if let Some(&v) = cache.lock().unwrap().get(&key) {
        return v as i32;
    }
    let value = match displaced_quad(e0, e1, c0, c1) {
        None => -1,
        // Same inversion as `build_pair0_dist`: `displaced_quad` constructs
        // a cube from slot occupancy, but the table is keyed by cubie
        // identity, so the search has to start from its inverse.
        Some(start) => shortest_depth(start.invert(), quad01_goal, quad01_bound, 12)
            .map(|d| d as i8)
            .unwrap_or(-1),
    };
    cache.lock().unwrap().insert(key, value);
    value as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_dist_diagonal_is_zero() {
        assert_eq!(edge_dist(0, 0), 0);
        assert_eq!(edge_dist(5, 5), 0);
    }

    #[test]
    fn corner_dist_diagonal_is_zero() {
        assert_eq!(corner_dist(0, 0), 0);
    }

    #[test]
    fn edge_dist_single_quarter_turn_is_one_step() {
        // R disturbs edge slot 2 (UR); whatever byte it leaves there is
        // exactly one quarter turn from that slot reading home again.
        let r = crate::moves::Move::new(crate::moves::Face::R, crate::moves::Turn::Cw).cube();
        let disturbed = r.edge(2);
        assert_ne!(disturbed, 2, "R should actually disturb slot 2");
        assert_eq!(edge_dist(disturbed, 2), 1);
    }

    #[test]
    fn pair0_dist_home_is_zero() {
        assert_eq!(pair0_dist(0, 0), 0);
    }

    #[test]
    fn quad01_dist_home_is_zero() {
        assert_eq!(quad01_dist(0, 1, 0, 1), 0);
    }

    #[test]
    fn pair0_dist_is_admissible_lower_bound_on_single_move() {
        // `pair0_dist` is keyed by cubie identity, not slot occupancy, so
        // the query has to read off `r.invert()`, same as `quad01_bound`.
        let r = crate::moves::Move::new(crate::moves::Face::R, crate::moves::Turn::Cw).cube();
        let inv = r.invert();
        let d = pair0_dist(inv.edge(0), inv.corner(0));
        assert!(
            d <= 1,
            "pair0 distance after one move must be at most 1, got {d}"
        );
    }

    #[test]
    fn quad01_dist_matches_the_direct_prefix_search_after_one_move() {
        let r = crate::moves::Move::new(crate::moves::Face::R, crate::moves::Turn::Cw).cube();
        let inv = r.invert();
        let table_value = quad01_dist(inv.edge(0), inv.edge(1), inv.corner(0), inv.corner(1));
        assert_eq!(table_value, prefix_search_dist(&r, 1));
    }
}
