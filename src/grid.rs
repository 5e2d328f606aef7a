use crate::dungeon_gen::{Dungeon, RoomRole};
use crate::geometry::Rect;

/// What occupies one tile of the debug map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Void,
    Floor,
    Corridor,
    Marker(RoomRole),
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Void => '#',
            Cell::Floor => '.',
            Cell::Corridor => ',',
            Cell::Marker(RoomRole::Spawn) => 'S',
            Cell::Marker(RoomRole::Boss) => 'B',
            Cell::Marker(RoomRole::Chest) => 'C',
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Cell::Void)
    }
}

/// Tile rasterisation of a dungeon, padded by the origin on every side
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Void; width * height],
        }
    }

    /// Paint corridors, then rooms, then role markers at room centres.
    pub fn from_dungeon(dungeon: &Dungeon) -> Self {
        let bounds = dungeon.bounds();
        let width = (bounds.x.max(0) * 2 + bounds.width).max(0) as usize;
        let height = (bounds.y.max(0) * 2 + bounds.height).max(0) as usize;
        let mut grid = Self::new(width, height);

        for corridor in dungeon.corridors() {
            grid.fill(corridor.rect(), Cell::Corridor);
        }
        for room in dungeon.rooms() {
            grid.fill(room.rect(), Cell::Floor);
        }
        for room in dungeon.rooms() {
            if let Some(role) = dungeon.role_of(room.id()) {
                let (cx, cy) = room.rect().center();
                if let Some(cell) = grid.get_mut(cx, cy) {
                    *cell = Cell::Marker(role);
                }
            }
        }
        grid
    }

    fn fill(&mut self, rect: Rect, value: Cell) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = value;
                }
            }
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(&self.cells[y as usize * self.width + x as usize])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(&mut self.cells[y as usize * self.width + x as usize])
    }

    /// One line per row, one glyph per tile
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width.max(1)) {
            out.extend(row.iter().map(|c| c.glyph()));
            out.push('\n');
        }
        out
    }
}
