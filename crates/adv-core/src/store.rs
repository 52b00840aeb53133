//! Room storage
//!
//! An arena of rooms addressed by [`RoomId`] with a name index on the side.
//! Each phase of a run (generation, then play) builds its own store.

use std::ops::Index;

use hashbrown::HashMap;

use crate::error::{ConfigError, GraphError};
use crate::room::{Room, RoomId, RoomKind};

/// Owns every room of one graph instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomStore {
    rooms: Vec<Room>,
    by_name: HashMap<String, RoomId>,
}

impl RoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rooms: Vec::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
        }
    }

    /// Build a store from rooms whose adjacency is already expressed in
    /// this store's id space.
    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self, ConfigError> {
        let mut store = Self::with_capacity(rooms.len());
        for room in rooms {
            store.push(room)?;
        }
        Ok(store)
    }

    /// Append a room; it gets the next id. Names must be unique.
    pub fn push(&mut self, room: Room) -> Result<RoomId, ConfigError> {
        if self.by_name.contains_key(&room.name) {
            return Err(ConfigError::DuplicateName(room.name));
        }
        let id = RoomId(self.rooms.len());
        self.by_name.insert(room.name.clone(), id);
        self.rooms.push(room);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// Exact-match name lookup
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: RoomId) -> Option<&str> {
        self.get(id).map(|room| room.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(i, room)| (RoomId(i), room))
    }

    pub fn ids(&self) -> impl Iterator<Item = RoomId> + use<> {
        (0..self.rooms.len()).map(RoomId)
    }

    /// Room names in id order
    pub fn names(&self) -> Vec<&str> {
        self.rooms.iter().map(|room| room.name.as_str()).collect()
    }

    /// Names of the rooms adjacent to `id`, in id order
    pub fn exit_names(&self, id: RoomId) -> Vec<&str> {
        self.get(id)
            .map(|room| {
                room.adjacent
                    .iter()
                    .filter_map(|&other| self.name(other))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Add a two-way connection. Self-loops and unknown ids are ignored;
    /// returns whether an edge was actually added.
    pub fn connect(&mut self, a: RoomId, b: RoomId) -> bool {
        if a == b || a.0 >= self.rooms.len() || b.0 >= self.rooms.len() {
            return false;
        }
        let added = self.rooms[a.0].adjacent.insert(b);
        self.rooms[b.0].adjacent.insert(a);
        added
    }

    pub fn set_kind(&mut self, id: RoomId, kind: RoomKind) {
        if let Some(room) = self.get_mut(id) {
            room.kind = kind;
        }
    }

    /// First room of the given kind
    pub fn first_of_kind(&self, kind: RoomKind) -> Option<RoomId> {
        self.iter()
            .find(|(_, room)| room.kind == kind)
            .map(|(id, _)| id)
    }

    pub fn count_of_kind(&self, kind: RoomKind) -> usize {
        self.rooms.iter().filter(|room| room.kind == kind).count()
    }

    /// The unique start room, or why there isn't one
    pub fn start(&self) -> Result<RoomId, GraphError> {
        if self.rooms.is_empty() {
            return Err(GraphError::Empty);
        }
        match self.count_of_kind(RoomKind::Start) {
            0 => Err(GraphError::NoStartRoom),
            1 => self
                .first_of_kind(RoomKind::Start)
                .ok_or(GraphError::NoStartRoom),
            n => Err(GraphError::MultipleStartRooms(n)),
        }
    }

    /// True when every edge has a matching reverse edge
    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(id, room)| {
            room.adjacent
                .iter()
                .all(|other| self.get(*other).is_some_and(|r| r.is_adjacent(id)))
        })
    }
}

impl Index<RoomId> for RoomStore {
    type Output = Room;

    fn index(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rooms() -> RoomStore {
        RoomStore::from_rooms(vec![
            Room::new("Bach").with_kind(RoomKind::Start),
            Room::new("Berg"),
            Room::new("Satie").with_kind(RoomKind::End),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_by_name_and_id() {
        let store = three_rooms();
        assert_eq!(store.len(), 3);
        assert_eq!(store.find("Berg"), Some(RoomId(1)));
        assert_eq!(store.find("berg"), None);
        assert_eq!(store.find(""), None);
        assert_eq!(store.name(RoomId(2)), Some("Satie"));
        assert_eq!(store.name(RoomId(3)), None);
        assert_eq!(store[RoomId(0)].name, "Bach");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut store = three_rooms();
        let err = store.push(Room::new("Bach")).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateName("Bach".to_string()));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_connect_is_symmetric() {
        let mut store = three_rooms();
        assert!(store.connect(RoomId(0), RoomId(2)));
        assert!(!store.connect(RoomId(2), RoomId(0)));
        assert!(!store.connect(RoomId(1), RoomId(1)));
        assert!(!store.connect(RoomId(1), RoomId(9)));

        assert!(store[RoomId(0)].is_adjacent(RoomId(2)));
        assert!(store[RoomId(2)].is_adjacent(RoomId(0)));
        assert_eq!(store[RoomId(1)].degree(), 0);
        assert!(store.is_symmetric());
        assert_eq!(store.exit_names(RoomId(0)), vec!["Satie"]);
    }

    #[test]
    fn test_one_way_edge_is_not_symmetric() {
        let mut store = three_rooms();
        store.get_mut(RoomId(0)).unwrap().adjacent.insert(RoomId(1));
        assert!(!store.is_symmetric());
    }

    #[test]
    fn test_start_room_checks() {
        let store = three_rooms();
        assert_eq!(store.start(), Ok(RoomId(0)));

        assert_eq!(RoomStore::new().start(), Err(GraphError::Empty));

        let mut no_start = three_rooms();
        no_start.set_kind(RoomId(0), RoomKind::Mid);
        assert_eq!(no_start.start(), Err(GraphError::NoStartRoom));

        let mut two_starts = three_rooms();
        two_starts.set_kind(RoomId(1), RoomKind::Start);
        assert_eq!(two_starts.start(), Err(GraphError::MultipleStartRooms(2)));
    }
}
