//! Location range addressing: block + aisle/column/level/position on two sides

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// "Any value" selection for one axis
pub const WILDCARD: &str = "*";

/// Blocks requested for the block picker
pub const BLOCK_OPTIONS_PAGE_SIZE: u32 = 1_000;

/// Location counts grouped by one axis; one row per distinct value
pub const LOCATION_AXIS_GROUPS_QUERY: &str = "query locationAxisGroups($filters: LocationSearchFilters, $groupBy: String!) { \
     locationGroups(filters: $filters, groupBy: $groupBy) { value count } }";

pub const BLOCK_OPTIONS_QUERY: &str = "query blockOptions($itemsPerPage: Int!) { \
     blocks(page: 1, itemsPerPage: $itemsPerPage, orderBy: [{ field: \"name\", ascending: true }]) { \
     count results { id name } } }";

/// Location axes from coarsest to finest
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LocationAxis {
    Aisle,
    Column,
    Level,
    Position,
}

impl LocationAxis {
    pub const ALL: [LocationAxis; 4] = [
        LocationAxis::Aisle,
        LocationAxis::Column,
        LocationAxis::Level,
        LocationAxis::Position,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Field name on the location record
    pub fn field(self) -> &'static str {
        match self {
            Self::Aisle => "aisle",
            Self::Column => "column",
            Self::Level => "level",
            Self::Position => "position",
        }
    }

    pub fn next_finer(self) -> Option<LocationAxis> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Axes strictly finer than `self`
    pub fn finer(self) -> impl Iterator<Item = LocationAxis> {
        Self::ALL.into_iter().skip(self.index() + 1)
    }

    /// Axes strictly coarser than `self`
    pub fn coarser(self) -> impl Iterator<Item = LocationAxis> {
        Self::ALL.into_iter().take(self.index())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Origin,
    Destination,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Origin, Side::Destination];

    pub fn mirror(self) -> Side {
        match self {
            Self::Origin => Self::Destination,
            Self::Destination => Self::Origin,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
        }
    }
}

/// One row of `locationGroups`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AxisValueGroup {
    pub value: Value,
    #[serde(default)]
    pub count: u64,
}

impl AxisValueGroup {
    /// Option text; `None` for null values and empty groups
    pub fn option(&self) -> Option<String> {
        if self.count == 0 {
            return None;
        }
        match &self.value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Variables grouping locations by `axis`, constrained by the coarser
/// selections already made. Wildcard selections do not constrain.
pub fn axis_query_variables(block_id: &str, axis: LocationAxis, fixed: &[(LocationAxis, &str)]) -> Value {
    let mut filters = Map::new();
    filters.insert("blockId".to_string(), Value::String(block_id.to_string()));
    for (axis, value) in fixed {
        if *value != WILDCARD {
            filters.insert(axis.field().to_string(), Value::String((*value).to_string()));
        }
    }
    json!({
        "filters": filters,
        "groupBy": axis.field(),
    })
}

/// Selected bound of one side; `None` means the axis is not selected
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct AxisSelection {
    pub aisle: Option<String>,
    pub column: Option<String>,
    pub level: Option<String>,
    pub position: Option<String>,
}

impl AxisSelection {
    pub fn get(&self, axis: LocationAxis) -> Option<&str> {
        match axis {
            LocationAxis::Aisle => self.aisle.as_deref(),
            LocationAxis::Column => self.column.as_deref(),
            LocationAxis::Level => self.level.as_deref(),
            LocationAxis::Position => self.position.as_deref(),
        }
    }

    pub fn set(&mut self, axis: LocationAxis, value: Option<String>) {
        match axis {
            LocationAxis::Aisle => self.aisle = value,
            LocationAxis::Column => self.column = value,
            LocationAxis::Level => self.level = value,
            LocationAxis::Position => self.position = value,
        }
    }
}

/// Inclusive location range chosen in a movement or cycle-count form
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct LocationRange {
    pub block_id: Option<String>,
    pub origin: AxisSelection,
    pub destination: AxisSelection,
}

impl LocationRange {
    /// Mutation input fields: `blockId`, `originAisle`, `destinationAisle`, ...
    /// Unselected and wildcard axes are omitted.
    pub fn to_filters(&self) -> Map<String, Value> {
        let mut filters = Map::new();
        if let Some(block_id) = &self.block_id {
            filters.insert("blockId".to_string(), Value::String(block_id.clone()));
        }
        for side in Side::ALL {
            let selection = match side {
                Side::Origin => &self.origin,
                Side::Destination => &self.destination,
            };
            for axis in LocationAxis::ALL {
                if let Some(value) = selection.get(axis).filter(|v| *v != WILDCARD) {
                    let field = axis.field();
                    let key = format!(
                        "{}{}{}",
                        side.prefix(),
                        field[..1].to_ascii_uppercase(),
                        &field[1..]
                    );
                    filters.insert(key, Value::String(value.to_string()));
                }
            }
        }
        filters
    }
}
