use super::coupling::Coupling;
use super::density::Density;
use super::measure::Measure;
use kappa_core::*;
use std::collections::VecDeque;

/// Exact optimal transport via the transportation simplex (MODI method).
///
/// Solves the balanced transportation linear program
///
/// ```text
/// minimize   Σ T[i][j] · c(x_i, y_j)
/// subject to Σ_j T[i][j] = p(x_i),  Σ_i T[i][j] = q(y_j),  T ≥ 0
/// ```
///
/// to optimality. Rows follow the source's `support()` order, columns the
/// target's, so the cost matrix and both marginals always agree on layout.
///
/// # Algorithm
///
/// 1. North-west corner rule for an initial basic feasible solution. Ties
///    keep a zero-flow cell in the basis so the basis stays a spanning tree
///    over the m + k row and column nodes.
/// 2. Solve dual potentials `u_i + v_j = c_ij` over the basis tree.
/// 3. Enter the first non-basic cell (row-major) with negative reduced cost.
/// 4. Push flow around the unique cycle the entering cell closes; the first
///    minimum-flow cell among the decreasing positions leaves.
/// 5. Repeat until no reduced cost is negative.
///
/// Steps 3 and 4 together are Bland's rule, which rules out cycling on
/// degenerate bases.
///
/// # Complexity
///
/// Each pivot is O(m·k). Supports here are one-hop neighborhoods, so m and k
/// are bounded by one plus the maximum degree.
pub struct Simplex<'a, P, Q, M>
where
    P: Density,
    Q: Density,
    M: Measure<X = P::Support, Y = Q::Support>,
{
    /// Ground metric for distances.
    metric: &'a M,
    /// Source distribution.
    source: &'a P,
    /// Target distribution.
    target: &'a Q,
    /// Source support in row order.
    rows: Vec<P::Support>,
    /// Target support in column order.
    cols: Vec<Q::Support>,
    /// Mass moved from row to column.
    plan: Vec<Vec<Probability>>,
}

impl<P, Q, M> Simplex<'_, P, Q, M>
where
    P: Density,
    Q: Density,
    M: Measure<X = P::Support, Y = Q::Support>,
{
    fn row(&self, x: &P::Support) -> Option<usize> {
        self.rows.iter().position(|r| r == x)
    }
    fn col(&self, y: &Q::Support) -> Option<usize> {
        self.cols.iter().position(|c| c == y)
    }
}

impl<P, Q, M> Coupling for Simplex<'_, P, Q, M>
where
    P: Density,
    Q: Density,
    M: Measure<X = P::Support, Y = Q::Support>,
{
    type X = P::Support;
    type Y = Q::Support;
    type P = P;
    type Q = Q;
    type M = M;

    fn minimize(mut self) -> Result<Self> {
        let supply = self
            .rows
            .iter()
            .map(|x| self.source.density(x))
            .collect::<Vec<_>>();
        let demand = self
            .cols
            .iter()
            .map(|y| self.target.density(y))
            .collect::<Vec<_>>();
        let cost = self
            .rows
            .iter()
            .map(|x| {
                self.cols
                    .iter()
                    .map(|y| self.metric.distance(x, y))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let mut tableau = Tableau::new(supply, demand, cost)?;
        let pivots = tableau.solve()?;
        log::trace!(
            "simplex solved {}x{} transport in {} pivots",
            self.rows.len(),
            self.cols.len(),
            pivots
        );
        self.plan = tableau.flow;
        Ok(self)
    }
    fn flow(&self, x: &Self::X, y: &Self::Y) -> Probability {
        match (self.row(x), self.col(y)) {
            (Some(i), Some(j)) => self.plan[i][j],
            _ => 0.,
        }
    }
    fn cost(&self) -> Energy {
        self.rows
            .iter()
            .zip(self.plan.iter())
            .flat_map(|(x, row)| {
                self.cols
                    .iter()
                    .zip(row.iter())
                    .map(move |(y, t)| (x, y, t))
            })
            .filter(|(_, _, t)| **t > 0.)
            .map(|(x, y, t)| t * self.metric.distance(x, y))
            .sum::<Energy>()
    }
}

impl<'a, P, Q, M> From<(&'a P, &'a Q, &'a M)> for Simplex<'a, P, Q, M>
where
    P: Density,
    Q: Density,
    M: Measure<X = P::Support, Y = Q::Support>,
{
    fn from((source, target, metric): (&'a P, &'a Q, &'a M)) -> Self {
        let rows = source.support().collect::<Vec<_>>();
        let cols = target.support().collect::<Vec<_>>();
        Self {
            plan: vec![vec![0.; cols.len()]; rows.len()],
            rows,
            cols,
            metric,
            source,
            target,
        }
    }
}

/// Optimal transport cost between `source` and `target` under `metric`.
pub fn emd<P, Q, M>(source: &P, target: &Q, metric: &M) -> Result<Energy>
where
    P: Density,
    Q: Density,
    M: Measure<X = P::Support, Y = Q::Support>,
{
    Simplex::from((source, target, metric))
        .minimize()
        .map(|coupling| coupling.cost())
}

/// Node of the bipartite basis tree.
#[derive(Debug, Clone, Copy)]
enum Side {
    Row(usize),
    Col(usize),
}

/// Dense transportation tableau over support positions.
struct Tableau {
    cost: Vec<Vec<Energy>>,
    flow: Vec<Vec<Probability>>,
    basis: Vec<Vec<bool>>,
}

impl Tableau {
    fn new(
        supply: Vec<Probability>,
        demand: Vec<Probability>,
        cost: Vec<Vec<Energy>>,
    ) -> Result<Self> {
        Self::validate(&supply, &demand, &cost)?;
        let (m, k) = (supply.len(), demand.len());
        let mut tableau = Self {
            cost,
            flow: vec![vec![0.; k]; m],
            basis: vec![vec![false; k]; m],
        };
        tableau.northwest(supply, demand);
        Ok(tableau)
    }
    fn m(&self) -> usize {
        self.cost.len()
    }
    fn k(&self) -> usize {
        self.cost.first().map_or(0, Vec::len)
    }

    fn validate(
        supply: &[Probability],
        demand: &[Probability],
        cost: &[Vec<Energy>],
    ) -> Result<()> {
        if supply.is_empty() || demand.is_empty() {
            return Err(Error::Numerical("transport between empty supports".into()));
        }
        if let Some(p) = supply
            .iter()
            .chain(demand)
            .find(|p| !p.is_finite() || **p < -MASS_TOLERANCE)
        {
            return Err(Error::Numerical(format!("mass {} is not a probability", p)));
        }
        let lhs = supply.iter().sum::<Probability>();
        let rhs = demand.iter().sum::<Probability>();
        if (lhs - rhs).abs() > MASS_TOLERANCE {
            return Err(Error::Numerical(format!(
                "unbalanced marginals: {} vs {}",
                lhs, rhs
            )));
        }
        if let Some(c) = cost.iter().flatten().find(|c| !c.is_finite() || **c < 0.) {
            return Err(Error::Numerical(format!("ground cost {} is unusable", c)));
        }
        Ok(())
    }

    /// Initial basic feasible solution with exactly m + k - 1 basic cells.
    fn northwest(&mut self, supply: Vec<Probability>, demand: Vec<Probability>) {
        let (m, k) = (supply.len(), demand.len());
        let mut supply = supply.into_iter().map(|p| p.max(0.)).collect::<Vec<_>>();
        let mut demand = demand.into_iter().map(|q| q.max(0.)).collect::<Vec<_>>();
        let (mut i, mut j) = (0, 0);
        loop {
            let mass = supply[i].min(demand[j]);
            self.flow[i][j] = mass;
            self.basis[i][j] = true;
            supply[i] -= mass;
            demand[j] -= mass;
            match (i + 1 == m, j + 1 == k) {
                (true, true) => break,
                (false, true) => i += 1,
                (true, false) => j += 1,
                (false, false) if supply[i] <= demand[j] => i += 1,
                (false, false) => j += 1,
            }
        }
    }

    /// Pivot until optimal. Returns the number of pivots taken.
    fn solve(&mut self) -> Result<usize> {
        for pivots in 0..SIMPLEX_ITERATIONS {
            let (u, v) = self.potentials()?;
            match self.entering(&u, &v) {
                None => return Ok(pivots),
                Some(cell) => self.pivot(cell)?,
            }
        }
        Err(Error::Numerical(format!(
            "transportation simplex did not converge within {} pivots",
            SIMPLEX_ITERATIONS
        )))
    }

    /// Dual potentials with `u[0] = 0`, propagated across the basis tree.
    fn potentials(&self) -> Result<(Vec<Energy>, Vec<Energy>)> {
        let (m, k) = (self.m(), self.k());
        let mut u = vec![Energy::NAN; m];
        let mut v = vec![Energy::NAN; k];
        let mut queue = VecDeque::from([Side::Row(0)]);
        u[0] = 0.;
        while let Some(side) = queue.pop_front() {
            match side {
                Side::Row(i) => {
                    for j in 0..k {
                        if self.basis[i][j] && v[j].is_nan() {
                            v[j] = self.cost[i][j] - u[i];
                            queue.push_back(Side::Col(j));
                        }
                    }
                }
                Side::Col(j) => {
                    for i in 0..m {
                        if self.basis[i][j] && u[i].is_nan() {
                            u[i] = self.cost[i][j] - v[j];
                            queue.push_back(Side::Row(i));
                        }
                    }
                }
            }
        }
        if u.iter().chain(v.iter()).any(|x| x.is_nan()) {
            return Err(Error::Numerical("basis does not span the tableau".into()));
        }
        Ok((u, v))
    }

    /// First improving cell in row-major order.
    fn entering(&self, u: &[Energy], v: &[Energy]) -> Option<(usize, usize)> {
        let k = self.k();
        (0..self.m())
            .flat_map(|i| (0..k).map(move |j| (i, j)))
            .filter(|&(i, j)| !self.basis[i][j])
            .find(|&(i, j)| self.cost[i][j] - u[i] - v[j] < -SIMPLEX_TOLERANCE)
    }

    /// Basis cells on the path from row `i` to column `j`, starting in row `i`.
    /// Even positions lose flow when `(i, j)` enters; odd positions gain it.
    fn cycle(&self, (i, j): (usize, usize)) -> Result<Vec<(usize, usize)>> {
        let (m, k) = (self.m(), self.k());
        let mut via_row = vec![None; m];
        let mut via_col = vec![None; k];
        let mut seen_row = vec![false; m];
        let mut seen_col = vec![false; k];
        let mut queue = VecDeque::from([Side::Col(j)]);
        seen_col[j] = true;
        while let Some(side) = queue.pop_front() {
            match side {
                Side::Col(c) => {
                    for r in 0..m {
                        if self.basis[r][c] && !seen_row[r] {
                            seen_row[r] = true;
                            via_row[r] = Some(c);
                            queue.push_back(Side::Row(r));
                        }
                    }
                }
                Side::Row(r) => {
                    for c in 0..k {
                        if self.basis[r][c] && !seen_col[c] {
                            seen_col[c] = true;
                            via_col[c] = Some(r);
                            queue.push_back(Side::Col(c));
                        }
                    }
                }
            }
            if seen_row[i] {
                break;
            }
        }
        let broken = || Error::Numerical(format!("cell ({}, {}) closes no cycle", i, j));
        let mut path = Vec::new();
        let mut r = i;
        loop {
            let c = via_row[r].ok_or_else(broken)?;
            path.push((r, c));
            if c == j {
                break;
            }
            r = via_col[c].ok_or_else(broken)?;
            path.push((r, c));
        }
        Ok(path)
    }

    fn pivot(&mut self, (i, j): (usize, usize)) -> Result<()> {
        let path = self.cycle((i, j))?;
        let (leave, theta) = path
            .iter()
            .step_by(2)
            .map(|&(r, c)| ((r, c), self.flow[r][c]))
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
            .ok_or_else(|| {
                Error::Numerical(format!("cell ({}, {}) closes an empty cycle", i, j))
            })?;
        self.flow[i][j] += theta;
        for (n, &(r, c)) in path.iter().enumerate() {
            match n % 2 {
                0 => self.flow[r][c] = (self.flow[r][c] - theta).max(0.),
                _ => self.flow[r][c] += theta,
            }
        }
        self.flow[leave.0][leave.1] = 0.;
        self.basis[leave.0][leave.1] = false;
        self.basis[i][j] = true;
        Ok(())
    }
}
