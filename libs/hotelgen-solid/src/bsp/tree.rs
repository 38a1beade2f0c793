//! Binary space partitioning tree for CSG boolean operations.
//!
//! csg.js-style clipping: each node stores the polygons coplanar with its
//! dividing plane plus front/back subtrees. Chained booleans produce deep,
//! unbalanced trees, so every traversal here (build, invert, clip, collect,
//! drop) runs on an explicit work stack rather than the call stack.

use super::polygon::Polygon;

/// A node in the BSP tree.
#[derive(Debug, Clone, Default)]
pub(crate) struct BspNode {
    polygons: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Builds a tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = BspNode::default();
        if polygons.is_empty() {
            return root;
        }

        let mut stack: Vec<(*mut BspNode, Vec<Polygon>)> =
            vec![(&mut root as *mut BspNode, polygons)];

        while let Some((node_ptr, mut polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }
            // Safety: pointers address nodes owned by `root`, which outlives
            // the loop; each node is on the stack at most once.
            let node = unsafe { &mut *node_ptr };

            let splitter = polys.swap_remove(0);
            let plane = *splitter.plane();
            node.polygons.push(splitter);

            let estimated = polys.len() / 2 + 1;
            let mut front_polys = Vec::with_capacity(estimated);
            let mut back_polys = Vec::with_capacity(estimated);
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();

            for poly in polys {
                poly.split(
                    &plane,
                    &mut coplanar_front,
                    &mut coplanar_back,
                    &mut front_polys,
                    &mut back_polys,
                );
            }
            // Both coplanar orientations live at this node.
            node.polygons.extend(coplanar_front);
            node.polygons.extend(coplanar_back);

            if !front_polys.is_empty() {
                let front = node.front.get_or_insert_with(Default::default);
                stack.push((front.as_mut() as *mut BspNode, front_polys));
            }
            if !back_polys.is_empty() {
                let back = node.back.get_or_insert_with(Default::default);
                stack.push((back.as_mut() as *mut BspNode, back_polys));
            }
        }

        root
    }

    /// Converts the tree to its complement: flips every polygon and swaps
    /// front/back subtrees.
    pub fn invert(&mut self) {
        let mut stack: Vec<*mut BspNode> = vec![self as *mut BspNode];

        while let Some(node_ptr) = stack.pop() {
            // Safety: see `new`.
            let node = unsafe { &mut *node_ptr };

            for poly in &mut node.polygons {
                poly.flip();
            }
            std::mem::swap(&mut node.front, &mut node.back);

            if let Some(ref mut front) = node.front {
                stack.push(front.as_mut() as *mut BspNode);
            }
            if let Some(ref mut back) = node.back {
                stack.push(back.as_mut() as *mut BspNode);
            }
        }
    }

    /// Removes the parts of `polygons` inside the solid this tree encodes.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }
            let Some(splitter) = node.polygons.first() else {
                result.extend(polys);
                continue;
            };
            let plane = *splitter.plane();

            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            for poly in polys {
                poly.split(
                    &plane,
                    &mut coplanar_front,
                    &mut coplanar_back,
                    &mut front_polys,
                    &mut back_polys,
                );
            }
            // Coplanar-front survives with the front set, coplanar-back
            // sinks with the back set.
            front_polys.extend(coplanar_front);
            back_polys.extend(coplanar_back);

            match node.front {
                Some(ref front) => stack.push((front.as_ref(), front_polys)),
                None => result.extend(front_polys),
            }
            // No back subtree means the back half-space is solid interior;
            // those fragments are discarded.
            if let Some(ref back) = node.back {
                stack.push((back.as_ref(), back_polys));
            }
        }

        result
    }

    /// Clips this tree's polygons against another tree.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<*mut BspNode> = vec![self as *mut BspNode];

        while let Some(node_ptr) = stack.pop() {
            // Safety: see `new`.
            let node = unsafe { &mut *node_ptr };

            node.polygons = other.clip_polygons(std::mem::take(&mut node.polygons));

            if let Some(ref mut front) = node.front {
                stack.push(front.as_mut() as *mut BspNode);
            }
            if let Some(ref mut back) = node.back {
                stack.push(back.as_mut() as *mut BspNode);
            }
        }
    }

    /// Collects all polygons in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            if let Some(ref front) = node.front {
                stack.push(front.as_ref());
            }
            if let Some(ref back) = node.back {
                stack.push(back.as_ref());
            }
        }

        result
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Some(front) = self.front.take() {
            stack.push(front);
        }
        if let Some(back) = self.back.take() {
            stack.push(back);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(front) = node.front.take() {
                stack.push(front);
            }
            if let Some(back) = node.back.take() {
                stack.push(back);
            }
        }
    }
}
