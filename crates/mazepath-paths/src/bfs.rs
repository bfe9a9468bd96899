use std::collections::{HashMap, VecDeque};

use mazepath_core::Coord;

use crate::traits::Pather;

/// Compute a multi-source breadth-first search distance map.
///
/// Each step has cost 1. Expansion stops when the distance exceeds
/// `max_dist`. Returns the distance of every reached coordinate; sources
/// map to 0.
pub fn bfs_map<P: Pather>(pather: &P, sources: &[Coord], max_dist: i32) -> HashMap<Coord, i32> {
    let mut dist: HashMap<Coord, i32> = HashMap::new();
    let mut queue: VecDeque<Coord> = VecDeque::new();

    for &src in sources {
        if dist.contains_key(&src) {
            continue;
        }
        dist.insert(src, 0);
        queue.push_back(src);
    }

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = queue.pop_front() {
        let current_dist = dist[&current];
        let nd = current_dist + 1;
        if nd > max_dist {
            continue;
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &next in nbuf.iter() {
            if dist.contains_key(&next) {
                continue;
            }
            dist.insert(next, nd);
            queue.push_back(next);
        }
    }

    log::debug!("bfs from {} sources: reached {}", sources.len(), dist.len());
    dist
}
