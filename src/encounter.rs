/// Whether the two IV halves of a capture record are unchanged in the record
/// observed later.
pub fn is_iv_match(original: (u16, u16), observed: (u16, u16)) -> bool {
    original.0 == observed.0 && original.1 == observed.1
}

/// Met location ids of the Sinnoh honey trees. Some routes have two trees
/// under one location id.
pub const HONEY_TREE_LOCATIONS: [u16; 21] = [
    20, // Route 205 South
    20, // Route 205 North
    21, // Route 206
    22, // Route 207
    23, // Route 208
    24, // Route 209
    25, // Route 210 South
    25, // Route 210 North
    26, // Route 211
    27, // Route 212 East
    27, // Route 212 West
    28, // Route 213
    29, // Route 214
    30, // Route 215
    33, // Route 218
    36, // Route 221
    37, // Route 222
    47, // Valley Windworks
    48, // Eterna Forest
    49, // Fuego Ironworks
    58, // Floaroma Meadow
];

pub fn is_honey_tree_location(location: u16) -> bool {
    HONEY_TREE_LOCATIONS.contains(&location)
}
