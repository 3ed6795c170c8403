use crate::face::{Direction, Face, FaceGrid, quarter_turn};

/// The faces bordering the front, in the order their strips are visited.
const FRONT_RING: [Face; 4] = [Face::Down, Face::Right, Face::Up, Face::Left];

/// Cycle the ring of tiles `depth` layers behind the front surface, as if the
/// front face were twisted at that depth. Neither the front nor the back grid
/// is turned; only the strips on the four bordering faces move.
///
/// Every tile of the ring is part of one four-tile cycle: the strip position
/// on each bordering face is the previous one pushed through a
/// counter-clockwise coordinate turn, starting from row `depth` of the down
/// face.
pub(crate) fn cycle_front_layer(faces: &mut [FaceGrid; 6], depth: usize, inverse: bool) {
    let order = faces[Face::Front as usize].order();
    let last = order - 1;

    for j in 0..order {
        let mut cycle = [(Face::Down, (depth, j)); 4];
        for k in 1..4 {
            let (_, previous) = cycle[k - 1];
            cycle[k] = (
                FRONT_RING[k],
                quarter_turn(previous, last, Direction::CounterClockwise),
            );
        }

        if inverse {
            cycle.reverse();
        }

        // Each slot takes the tile of the slot after it, which moves tiles
        // up -> right -> down -> left -> up for a clockwise twist.
        let (face, pos) = cycle[0];
        let tile = faces[face as usize][pos];
        for k in 0..3 {
            let (to_face, to_pos) = cycle[k];
            let (from_face, from_pos) = cycle[k + 1];
            faces[to_face as usize][to_pos] = faces[from_face as usize][from_pos];
        }
        let (face, pos) = cycle[3];
        faces[face as usize][pos] = tile;
    }
}
