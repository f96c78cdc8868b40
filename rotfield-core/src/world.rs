//! Rotfield world data.
//!
//! The five locations, their display metadata, and the validated registry
//! that holds them. All location data is compiled in; the registry exists
//! so the adjacency graph is checked once at startup instead of trusted at
//! every lookup.

use std::fmt;

use thiserror::Error;

/// Errors from registry construction and token resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    #[error("location registered twice: {0}")]
    DuplicateLocation(LocationId),

    #[error("{from} lists a boardwalk to unregistered location {to}")]
    UnregisteredConnection { from: LocationId, to: LocationId },

    #[error("registry is missing {0}")]
    MissingLocation(LocationId),
}

// ============================================================================
// Location identifiers
// ============================================================================

/// Identifier for one of the five Rotfield locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationId {
    Shacks,
    Boardwalks,
    Gardens,
    BonePiles,
    BulletinBoards,
}

/// Alternate spellings accepted by `visit`, collapsed to their canonical
/// multi-word identifiers. An explicit table: nothing else is aliased.
const ALIASES: &[(&str, LocationId)] = &[
    ("bonepiles", LocationId::BonePiles),
    ("bulletinboards", LocationId::BulletinBoards),
];

impl LocationId {
    /// Every location, in registration order. Tab rows and the valid-token
    /// listing in terminal errors both follow this order.
    pub const ALL: [LocationId; 5] = [
        LocationId::Shacks,
        LocationId::Boardwalks,
        LocationId::Gardens,
        LocationId::BonePiles,
        LocationId::BulletinBoards,
    ];

    /// Canonical token, as shown in help text and error listings.
    pub fn token(&self) -> &'static str {
        match self {
            LocationId::Shacks => "shacks",
            LocationId::Boardwalks => "boardwalks",
            LocationId::Gardens => "gardens",
            LocationId::BonePiles => "bonePiles",
            LocationId::BulletinBoards => "bulletinBoards",
        }
    }

    /// Resolve a raw token, case-insensitively, consulting the alias table.
    pub fn resolve(token: &str) -> Option<LocationId> {
        let token = token.to_lowercase();

        if let Some(id) = LocationId::ALL
            .iter()
            .copied()
            .find(|id| id.token().to_lowercase() == token)
        {
            return Some(id);
        }

        ALIASES
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, id)| *id)
    }

    /// The canonical tokens joined for error listings, in registration order.
    pub fn valid_tokens() -> String {
        LocationId::ALL
            .iter()
            .map(|id| id.token())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

// ============================================================================
// Locations
// ============================================================================

/// Presentation theme token carried by each location. The UI maps these to
/// concrete colors; the core only records which family a location belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Indigo,
    Green,
    Emerald,
    Rose,
    Amber,
}

/// A single content node: display metadata plus its boardwalk connections.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    pub content: String,
    pub insight: String,
    pub connections: Vec<LocationId>,
    pub theme: Theme,
}

impl Location {
    pub fn new(
        id: LocationId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            content: String::new(),
            insight: String::new(),
            connections: Vec::new(),
            theme: Theme::Green,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_insight(mut self, insight: impl Into<String>) -> Self {
        self.insight = insight.into();
        self
    }

    pub fn with_connections(mut self, connections: Vec<LocationId>) -> Self {
        self.connections = connections;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

lazy_static::lazy_static! {
    /// The Rotfield locations, in registration order.
    pub static ref LOCATIONS: Vec<Location> = vec![
        Location::new(
            LocationId::Shacks,
            "Conceptual Shacks",
            "Half-built structures housing ideas in various states of completion.",
        )
        .with_content(
            "Shacks are semi-permanent structures that house ideas without constraining \
             them. Unlike the perfect architecture of cathedrals, shacks can be expanded, \
             abandoned, rebuilt, and connected in ways their original builders never \
             imagined.",
        )
        .with_insight(
            "Shacks represent adaptable architecture - built from available materials, \
             responsive to immediate needs rather than grand plans. They collapse when \
             necessary and can be rebuilt in new forms.",
        )
        .with_connections(vec![LocationId::Boardwalks, LocationId::Gardens])
        .with_theme(Theme::Indigo),

        Location::new(
            LocationId::Boardwalks,
            "Connecting Boardwalks",
            "Rickety paths connecting disparate ideas across the swamp.",
        )
        .with_content(
            "The boardwalks are minimal connections between ideas – not rigid highways, \
             but flexible paths that shift with the landscape. They allow for wandering, \
             for getting lost, for discovering new connections between seemingly \
             unrelated shacks of thought.",
        )
        .with_insight(
            "Boardwalks represent the minimal viable structure needed to move between \
             ideas without getting completely lost in the swamp. They're deliberately \
             imperfect, requiring attention and care from the traveler.",
        )
        .with_connections(vec![
            LocationId::Shacks,
            LocationId::Gardens,
            LocationId::BonePiles,
            LocationId::BulletinBoards,
        ])
        .with_theme(Theme::Green),

        Location::new(
            LocationId::Gardens,
            "Knowledge Gardens",
            "Plots of cultivated ideas growing amid the fertile rot.",
        )
        .with_content(
            "Gardens represent areas where knowledge is actively cultivated. They exist \
             in a productive tension between order and chaos, between deliberate growth \
             and wild emergence. Unlike sterile databases, gardens require tending, \
             seasonal shifts, and accept that some plants will die while others \
             unexpectedly thrive.",
        )
        .with_insight(
            "Gardens embrace the organic nature of knowledge - it grows, withers, \
             transforms, and seeds new growth in unexpected places.",
        )
        .with_connections(vec![
            LocationId::Shacks,
            LocationId::Boardwalks,
            LocationId::BonePiles,
        ])
        .with_theme(Theme::Emerald),

        Location::new(
            LocationId::BonePiles,
            "Memory Bone Piles",
            "Heaps of old notes, abandoned drafts, and conversation fragments.",
        )
        .with_content(
            "Bone piles are the remains of past thinking - chat logs, notes, abandoned \
             drafts, and fragments that didn't become anything formal. But in Rotfield, \
             these aren't considered failures or waste. They're raw material for note \
             necromancy - the art of raising new meaning from what looks like ruin.",
        )
        .with_insight(
            "Bone piles recognize that apparent failure and decay are essential parts \
             of knowledge work. They honor what didn't work while extracting value from \
             its remains.",
        )
        .with_connections(vec![LocationId::Boardwalks, LocationId::Gardens])
        .with_theme(Theme::Rose),

        Location::new(
            LocationId::BulletinBoards,
            "Community Bulletin Boards",
            "Weather-worn boards covered with notes, questions, and invitations.",
        )
        .with_content(
            "Bulletin boards serve as invitation spaces where questions, reflections, \
             and possibilities can be posted without immediate pressure to develop them. \
             They're spaces of potential connection, where wanderers can leave traces \
             for others to discover.",
        )
        .with_insight(
            "Bulletin boards create low-stakes entry points into complex ideas. They \
             invite participation, question-asking, and tentative connections.",
        )
        .with_connections(vec![LocationId::Boardwalks])
        .with_theme(Theme::Amber),
    ];
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable location registry, validated at construction.
#[derive(Debug, Clone)]
pub struct Registry {
    locations: Vec<Location>,
}

impl Registry {
    /// Build the registry of compiled-in locations. Besides the graph checks
    /// in [`Registry::from_locations`], this requires an entry for every
    /// [`LocationId`], so later `get` calls on the session's registry cannot
    /// miss.
    pub fn builtin() -> Result<Self, WorldError> {
        let registry = Self::from_locations(LOCATIONS.clone())?;
        for id in LocationId::ALL {
            if registry.get(id).is_none() {
                return Err(WorldError::MissingLocation(id));
            }
        }
        Ok(registry)
    }

    /// Build a registry from arbitrary locations, failing fast on duplicate
    /// ids or boardwalks that lead outside the registry.
    pub fn from_locations(locations: Vec<Location>) -> Result<Self, WorldError> {
        for (index, location) in locations.iter().enumerate() {
            if locations[..index].iter().any(|seen| seen.id == location.id) {
                return Err(WorldError::DuplicateLocation(location.id));
            }
        }

        for location in &locations {
            for &target in &location.connections {
                if !locations.iter().any(|candidate| candidate.id == target) {
                    return Err(WorldError::UnregisteredConnection {
                        from: location.id,
                        to: target,
                    });
                }
            }
        }

        Ok(Self { locations })
    }

    /// Look up a location by id.
    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    /// Resolve a raw token (case-insensitive, alias-aware) to its location.
    pub fn lookup(&self, token: &str) -> Result<&Location, WorldError> {
        LocationId::resolve(token)
            .and_then(|id| self.get(id))
            .ok_or_else(|| WorldError::UnknownLocation(token.to_string()))
    }

    /// All locations, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_is_closed() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.len(), 5);

        for location in registry.iter() {
            for &target in &location.connections {
                assert!(
                    registry.get(target).is_some(),
                    "{} connects to unregistered {}",
                    location.id,
                    target
                );
            }
        }
    }

    #[test]
    fn registration_order_is_stable() {
        let registry = Registry::builtin().unwrap();
        let ids: Vec<LocationId> = registry.iter().map(|location| location.id).collect();
        assert_eq!(ids, LocationId::ALL.to_vec());
    }

    #[test]
    fn resolve_accepts_canonical_tokens() {
        assert_eq!(LocationId::resolve("shacks"), Some(LocationId::Shacks));
        assert_eq!(LocationId::resolve("gardens"), Some(LocationId::Gardens));
        assert_eq!(LocationId::resolve("bonePiles"), Some(LocationId::BonePiles));
        assert_eq!(
            LocationId::resolve("bulletinBoards"),
            Some(LocationId::BulletinBoards)
        );
    }

    #[test]
    fn resolve_accepts_aliases_and_case() {
        assert_eq!(LocationId::resolve("bonepiles"), Some(LocationId::BonePiles));
        assert_eq!(
            LocationId::resolve("bulletinboards"),
            Some(LocationId::BulletinBoards)
        );
        assert_eq!(LocationId::resolve("SHACKS"), Some(LocationId::Shacks));
        assert_eq!(LocationId::resolve("nowhere"), None);
    }

    #[test]
    fn lookup_reports_unknown_tokens() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.lookup("gardens").unwrap().name, "Knowledge Gardens");
        assert_eq!(
            registry.lookup("the-void").unwrap_err(),
            WorldError::UnknownLocation("the-void".to_string())
        );
    }

    #[test]
    fn duplicate_registration_fails() {
        let locations = vec![
            Location::new(LocationId::Shacks, "One", "first"),
            Location::new(LocationId::Shacks, "Two", "second"),
        ];
        assert_eq!(
            Registry::from_locations(locations).unwrap_err(),
            WorldError::DuplicateLocation(LocationId::Shacks)
        );
    }

    #[test]
    fn dangling_connection_fails() {
        let locations = vec![Location::new(LocationId::Shacks, "One", "first")
            .with_connections(vec![LocationId::Gardens])];
        assert_eq!(
            Registry::from_locations(locations).unwrap_err(),
            WorldError::UnregisteredConnection {
                from: LocationId::Shacks,
                to: LocationId::Gardens,
            }
        );
    }

    #[test]
    fn builtin_requires_full_coverage() {
        // An otherwise-valid partial registry is fine via from_locations...
        let partial = vec![Location::new(LocationId::Shacks, "One", "first")];
        assert!(Registry::from_locations(partial).is_ok());

        // ...but the built-in table itself must cover every id.
        let registry = Registry::builtin().unwrap();
        for id in LocationId::ALL {
            assert!(registry.get(id).is_some());
        }
    }

    #[test]
    fn valid_tokens_follow_registration_order() {
        assert_eq!(
            LocationId::valid_tokens(),
            "shacks, boardwalks, gardens, bonePiles, bulletinBoards"
        );
    }
}
