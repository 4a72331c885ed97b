//! Property-based tests over the stencil and line-scan kernels.

use proptest::prelude::*;
use vtr::core::Color;
use vtr::{render_dot, scan_line, StencilBuffer};

const ROWS: u16 = 40;
const COLS: u16 = 80;

fn cell_bit(x: u16, y: u16, cols: u16) -> (usize, u8) {
    let row = usize::from(y >> 2);
    let col = usize::from(x >> 1);
    let idx = row * usize::from(cols) + col;
    let bit = (1u8 << (y & 3)) << ((x & 1) * 4);
    (idx, bit)
}

proptest! {
    #[test]
    fn plot_round_trip_sets_exactly_one_bit(x in 0u16..(COLS * 2), y in 0u16..(ROWS * 4)) {
        let mut sb = StencilBuffer::new(ROWS, COLS).unwrap();
        render_dot(&mut sb, i32::from(x), i32::from(y), Color::Default);
        let (idx, bit) = cell_bit(x, y, COLS);
        prop_assert_eq!(sb.mask()[idx] & bit, bit);
        for (i, &m) in sb.mask().iter().enumerate() {
            if i != idx {
                prop_assert_eq!(m, 0);
            } else {
                prop_assert_eq!(m, bit);
            }
        }
    }

    #[test]
    fn line_symmetry_over_arbitrary_endpoints(
        x0 in -10i32..170, y0 in -10i32..170,
        x1 in -10i32..170, y1 in -10i32..170,
    ) {
        let mut a = StencilBuffer::new(ROWS, COLS).unwrap();
        let mut b = StencilBuffer::new(ROWS, COLS).unwrap();
        scan_line(&mut a, x0, y0, x1, y1, Color::Default);
        scan_line(&mut b, x1, y1, x0, y0, Color::Default);
        prop_assert_eq!(a.mask(), b.mask());
    }
}
