use crate::animation::FrameParams;
use crate::error::CanopyResult;
use crate::math::{Point2D, PolarOffset};
use super::params::TreeParams;
use super::rng::BranchRng;

/// A single stroke of the tree. Produced per frame, drawn once, then dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
    pub width: f64,
}

/// Recursion state of one branch. Its random stream is keyed by generation and sibling index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    /// Where the branch starts (the parent's end point)
    pub start: Point2D,
    /// Heading in degrees
    pub angle: f64,
    /// Length budget of this branch
    pub growth: f64,
    /// Depth from the trunk (0 = trunk)
    pub generation: u32,
}

impl Branch {
    pub fn end(&self) -> Point2D {
        self.start + PolarOffset::new(self.angle, self.growth)
    }
}

/// Fractal tree generator.
///
/// The tree is rebuilt from scratch for every frame out of the frame's growth and
/// wind twist. Nothing is kept between calls, so equal inputs give bit-identical output.
#[derive(Debug, Clone)]
pub struct TreeGenerator {
    params: TreeParams,
}

impl TreeGenerator {
    pub fn new(params: TreeParams) -> CanopyResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &TreeParams {
        &self.params
    }

    /// The generation-0 branch for the given root growth
    pub fn trunk(&self, growth: f64) -> Branch {
        Branch {
            start: self.params.start,
            angle: self.params.start_angle,
            growth,
            generation: 0,
        }
    }

    /// Generate the whole tree for one frame, parents before children
    pub fn generate(&self, frame: FrameParams) -> Vec<Segment> {
        self.generate_from(self.trunk(frame.growth), frame.wind_twist)
    }

    /// Generate the subtree rooted at `branch`
    pub fn generate_from(&self, branch: Branch, wind_twist: f64) -> Vec<Segment> {
        let mut segments = Vec::new();
        self.grow_branch(branch, wind_twist, &mut segments);
        segments
    }

    /// Lazy variant of [`generate`](Self::generate) driven by an explicit work stack
    pub fn segments(&self, frame: FrameParams) -> Segments<'_> {
        Segments {
            generator: self,
            wind_twist: frame.wind_twist,
            stack: vec![self.trunk(frame.growth)],
        }
    }

    fn grow_branch(&self, branch: Branch, wind_twist: f64, out: &mut Vec<Segment>) {
        let end = branch.end();
        out.push(self.segment(&branch, end));

        if !self.branches(&branch) {
            return;
        }

        for child in self.children(branch, end, wind_twist) {
            self.grow_branch(child, wind_twist, out);
        }
    }

    /// Sole base case, shared by both traversals. NaN growth never branches.
    fn branches(&self, branch: &Branch) -> bool {
        branch.growth > self.params.branching_threshold
    }

    fn segment(&self, branch: &Branch, end: Point2D) -> Segment {
        Segment {
            start: branch.start,
            end,
            width: branch.growth * self.params.width_scale,
        }
    }

    /// Number of children of any branching node in `generation`.
    ///
    /// Drawn from the stream of sibling 0, so it shares a seed with the first child.
    fn branch_count(&self, generation: u32) -> u32 {
        let [min, max] = self.params.branch_count;
        BranchRng::for_branch(generation, 0).uniform_inclusive(min, max)
    }

    fn children(&self, parent: Branch, end: Point2D, wind_twist: f64) -> impl Iterator<Item = Branch> + '_ {
        (0..self.branch_count(parent.generation))
            .map(move |sibling_index| self.child(&parent, end, sibling_index, wind_twist))
    }

    fn child(&self, parent: &Branch, start: Point2D, sibling_index: u32, wind_twist: f64) -> Branch {
        let params = &self.params;
        let mut rng = BranchRng::for_branch(parent.generation, sibling_index);

        let variation = params.angle_variation;
        let angle = rng.uniform(parent.angle - variation, parent.angle + variation) + wind_twist;

        // decay <= 1 and threshold > 0 keep this strictly below the parent's growth
        let [lo, hi] = params.decay;
        let growth = (parent.growth - params.branching_threshold) * rng.uniform(lo, hi);

        Branch {
            start,
            angle,
            growth,
            generation: parent.generation + 1,
        }
    }
}

impl Default for TreeGenerator {
    fn default() -> Self {
        Self {
            params: TreeParams::default(),
        }
    }
}

/// Pre-order segment iterator over an explicit stack of pending branches
pub struct Segments<'a> {
    generator: &'a TreeGenerator,
    wind_twist: f64,
    stack: Vec<Branch>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let branch = self.stack.pop()?;
        let end = branch.end();

        if self.generator.branches(&branch) {
            // Push in reverse so sibling 0 is popped first
            let first = self.stack.len();
            self.stack.extend(self.generator.children(branch, end, self.wind_twist));
            self.stack[first..].reverse();
        }

        Some(self.generator.segment(&branch, end))
    }
}
