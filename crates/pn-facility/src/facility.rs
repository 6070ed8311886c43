//! Facility records and the immutable, `NodeId`-indexed facility set.
//!
//! # Data layout
//!
//! Positions are stored in their own contiguous `Vec<GeoPoint>` so the
//! routing graph can borrow them as a plain slice (`positions()`) without
//! touching names or capacity figures.

use rustc_hash::FxHashMap;

use pn_core::{GeoPoint, NodeId};

use crate::{FacilityError, FacilityResult};

// ── Facility ──────────────────────────────────────────────────────────────────

/// One facility (e.g. a container port) as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub name: String,
    pub position: GeoPoint,
    /// Annual cargo throughput in millions of metric tons, if known.
    pub cargo_capacity_mt: Option<f64>,
    /// Annual container throughput in millions of TEU, if known.
    pub container_capacity_teu: Option<f64>,
}

impl Facility {
    pub fn new(name: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            name: name.into(),
            position,
            cargo_capacity_mt: None,
            container_capacity_teu: None,
        }
    }

    pub fn with_capacities(mut self, cargo_mt: Option<f64>, container_teu: Option<f64>) -> Self {
        self.cargo_capacity_mt = cargo_mt;
        self.container_capacity_teu = container_teu;
        self
    }
}

// ── FacilitySet ───────────────────────────────────────────────────────────────

/// An immutable facility table.  `NodeId(i)` refers to the `i`-th facility
/// in insertion order.
///
/// Do not construct directly; use [`FacilitySetBuilder`] or the CSV loader.
#[derive(Debug, Clone)]
pub struct FacilitySet {
    names: Vec<String>,
    positions: Vec<GeoPoint>,
    cargo_mt: Vec<Option<f64>>,
    container_teu: Vec<Option<f64>>,
    by_name: FxHashMap<String, NodeId>,
}

impl FacilitySet {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.len()
    }

    /// All node IDs in index order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.len() as u32).map(NodeId)
    }

    /// Coordinates indexed by `NodeId`.  This is what routing graphs borrow.
    pub fn positions(&self) -> &[GeoPoint] {
        &self.positions
    }

    pub fn position(&self, node: NodeId) -> Option<GeoPoint> {
        self.positions.get(node.index()).copied()
    }

    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.names.get(node.index()).map(String::as_str)
    }

    /// Reassemble the full record for `node`.
    pub fn get(&self, node: NodeId) -> Option<Facility> {
        let i = node.index();
        Some(Facility {
            name: self.names.get(i)?.clone(),
            position: self.positions[i],
            cargo_capacity_mt: self.cargo_mt[i],
            container_capacity_teu: self.container_teu[i],
        })
    }

    /// Exact-match name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str, GeoPoint)> + '_ {
        self.ids()
            .zip(self.names.iter())
            .zip(self.positions.iter())
            .map(|((id, name), pos)| (id, name.as_str(), *pos))
    }
}

// ── FacilitySetBuilder ────────────────────────────────────────────────────────

/// Incremental builder for [`FacilitySet`].
///
/// ```ignore
/// let mut b = FacilitySetBuilder::new();
/// let sha = b.add(Facility::new("Shanghai", GeoPoint::new(31.2304, 121.4737)))?;
/// let set = b.build()?;
/// ```
#[derive(Default)]
pub struct FacilitySetBuilder {
    names: Vec<String>,
    positions: Vec<GeoPoint>,
    cargo_mt: Vec<Option<f64>>,
    container_teu: Vec<Option<f64>>,
    by_name: FxHashMap<String, NodeId>,
}

impl FacilitySetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a facility, returning its `NodeId`.
    ///
    /// Coordinates are validated here, at the boundary where they enter the
    /// system; the distance model itself does not check ranges.
    pub fn add(&mut self, facility: Facility) -> FacilityResult<NodeId> {
        let Facility { name, position, cargo_capacity_mt, container_capacity_teu } = facility;

        let position = GeoPoint::try_new(position.lat, position.lon)?;
        if self.by_name.contains_key(&name) {
            return Err(FacilityError::DuplicateName(name));
        }
        let id = NodeId::try_from(self.positions.len())
            .map_err(|_| FacilityError::Parse("too many facilities for a u32 NodeId".into()))?;

        self.by_name.insert(name.clone(), id);
        self.names.push(name);
        self.positions.push(position);
        self.cargo_mt.push(cargo_capacity_mt);
        self.container_teu.push(container_capacity_teu);
        Ok(id)
    }

    /// Finalise the table.  An empty table is rejected: a query needs at
    /// least one node.
    pub fn build(self) -> FacilityResult<FacilitySet> {
        if self.positions.is_empty() {
            return Err(FacilityError::Empty);
        }
        tracing::debug!(facilities = self.positions.len(), "facility set built");
        Ok(FacilitySet {
            names: self.names,
            positions: self.positions,
            cargo_mt: self.cargo_mt,
            container_teu: self.container_teu,
            by_name: self.by_name,
        })
    }
}
