//! Test data generators for creating synthetic radar-like grids.
//!
//! These generators create predictable, verifiable test data patterns
//! that can be used across the test suite. All grids are returned as rows
//! of columns, the same layout the decoder produces.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that data is being read/written correctly
/// by checking that grid[row][col] == col * 1000 + row.
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 5);        // rows
/// assert_eq!(grid[0].len(), 10);    // columns
/// assert_eq!(grid[0][1], 1000.0);   // col=1, row=0
/// assert_eq!(grid[1][0], 1.0);      // col=0, row=1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<Vec<f64>> {
    (0..height)
        .map(|row| (0..width).map(|col| (col * 1000 + row) as f64).collect())
        .collect()
}

/// Creates a reflectivity-like grid in dBZ.
///
/// A single storm cell peaks at ~55 dBZ in the middle of the grid and falls
/// off to 0 dBZ at the edges. No sentinels are included.
pub fn create_reflectivity_grid(width: usize, height: usize) -> Vec<Vec<f64>> {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;
    let max_dist = ((center_x * center_x) + (center_y * center_y)).sqrt().max(1.0);

    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let dx = col as f64 - center_x;
                    let dy = row as f64 - center_y;
                    let dist = (dx * dx + dy * dy).sqrt();
                    let dbz = 55.0 * (1.0 - dist / max_dist);
                    (dbz * 10.0).round() / 10.0
                })
                .collect()
        })
        .collect()
}

/// Creates a grid with deterministic no-data sentinels sprinkled in.
///
/// Roughly one cell in three is `-127` or `-128`; the rest hold values in
/// `0.0..50.0`. The same seed always produces the same grid.
pub fn create_grid_with_sentinels(width: usize, height: usize, seed: u32) -> Vec<Vec<f64>> {
    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let hash = simple_hash(col as u32, row as u32, seed);
                    match hash % 6 {
                        0 => -127.0,
                        1 => -128.0,
                        _ => (hash % 5000) as f64 / 100.0,
                    }
                })
                .collect()
        })
        .collect()
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

/// Creates a grid filled with a constant value.
pub fn create_constant_grid(width: usize, height: usize, value: f64) -> Vec<Vec<f64>> {
    vec![vec![value; width]; height]
}

/// Renders rows as the CSV text the radar service compresses.
///
/// Values are written with Rust's shortest round-trip formatting, so
/// parsing the text back yields the exact same numbers.
pub fn grid_to_csv(rows: &[Vec<f64>]) -> String {
    let mut text = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        text.push_str(&line.join(","));
        text.push('\n');
    }
    text
}
