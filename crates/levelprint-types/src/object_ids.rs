//! Static object-id tables used by [`classify`](crate::classify).
//!
//! Each table is sorted so lookups can binary search. The three tables are
//! disjoint; an id appearing in more than one would make classification
//! depend on lookup order.

/// Blocks, slabs, and platforms.
pub const SOLID_OBJECTS: &[i64] = &[
    1, 2, 3, 4, 5, 6, 7, 40, 62, 63, 64, 65, 66, 68, 69, 70, 71, 72, 74, 75, 76, 77, 78, 81, 82,
    83, 90, 91, 92, 93, 94, 95, 96, 116, 117, 118, 119, 120, 121, 122, 146, 147, 160, 161, 162,
    163, 164, 165, 166, 167, 168, 169, 192, 194, 195, 196, 197, 204, 206, 207, 208, 209, 210,
    212, 213, 215, 219, 220, 247, 248, 249, 250, 251, 252, 253, 254, 255, 256, 258, 259, 260,
    261, 263, 264, 265, 267, 268, 269, 270, 271, 272, 274, 275, 467, 468, 469, 470, 471, 472,
    473, 475, 483, 484, 492, 493, 651, 652, 661, 662, 663, 664, 1338, 1339, 1341, 1342, 1343,
    1344, 1345, 1903, 1904, 1905, 1906, 1907, 1908, 1910, 1911,
];

/// Spikes, saws, and other contact hazards.
pub const HAZARD_OBJECTS: &[i64] = &[
    8, 9, 39, 61, 88, 89, 98, 103, 135, 177, 178, 179, 183, 184, 185, 186, 187, 188, 216, 217,
    218, 243, 244, 363, 364, 365, 366, 367, 368, 392, 397, 398, 399, 421, 422, 446, 447, 458,
    459, 667, 678, 679, 680, 720, 740, 741, 742, 768, 918, 919, 989, 991, 1619, 1620, 1701,
    1702, 1703, 1705, 1706, 1707, 1708, 1709, 1710, 1711, 1712, 1713, 1714, 1715, 1716, 1717,
    1718, 1719, 1720, 1721, 1722, 1723, 1724, 1725, 1726, 1727, 1728, 1729, 1730, 1731, 1732,
    1733, 1734, 1735, 1736,
];

/// Portals, orbs, pads, coins, and speed changers.
pub const OTHER_OBJECTS: &[i64] = &[
    10, 11, 12, 13, 35, 36, 45, 46, 47, 67, 84, 99, 101, 111, 140, 141, 142, 200, 201, 202, 203,
    286, 287, 660, 745, 747, 749, 1022, 1329, 1330, 1332, 1333, 1334, 1594, 1704, 1751, 1933,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn is_strictly_sorted(table: &[i64]) -> bool {
        table.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn tables_are_sorted() {
        assert!(is_strictly_sorted(SOLID_OBJECTS));
        assert!(is_strictly_sorted(HAZARD_OBJECTS));
        assert!(is_strictly_sorted(OTHER_OBJECTS));
    }

    #[test]
    fn tables_are_disjoint() {
        for id in SOLID_OBJECTS {
            assert!(HAZARD_OBJECTS.binary_search(id).is_err(), "{id} in solid and hazard");
            assert!(OTHER_OBJECTS.binary_search(id).is_err(), "{id} in solid and other");
        }
        for id in HAZARD_OBJECTS {
            assert!(OTHER_OBJECTS.binary_search(id).is_err(), "{id} in hazard and other");
        }
    }
}
