use criterion::{black_box, criterion_group, criterion_main, Criterion};
use playfield::core::Grid;
use playfield::types::{Color, Coordinate, Piece};

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::default();
            // Fill bottom 4 rows
            grid.fill_area(Coordinate::new(0, 16), Coordinate::new(9, 19), 1, Color::Gray);
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_drop_path(c: &mut Criterion) {
    let mut grid = Grid::default();
    grid.fill_area(Coordinate::new(0, 17), Coordinate::new(9, 19), 1, Color::Gray);
    let t = Piece::from_coordinates(
        [(3, 1), (4, 1), (5, 1), (4, 0)].map(|(x, y)| Coordinate::new(x, y)),
        2,
        Color::Purple,
    );

    c.bench_function("drop_path", |b| {
        b.iter(|| black_box(grid.drop_path(black_box(&t))))
    });
}

fn bench_rotate_piece(c: &mut Criterion) {
    let grid = Grid::default();
    let t = Piece::from_coordinates(
        [(3, 5), (4, 5), (5, 5), (4, 4)].map(|(x, y)| Coordinate::new(x, y)),
        2,
        Color::Purple,
    );

    c.bench_function("rotate_piece", |b| {
        b.iter(|| black_box(grid.rotate_piece(black_box(&t), Coordinate::new(4, 5), true)))
    });
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut grid = Grid::default();
    grid.fill_area(Coordinate::new(0, 0), Coordinate::new(9, 19), 3, Color::Blue);

    c.bench_function("find_connected_cells_full_grid", |b| {
        b.iter(|| black_box(grid.find_connected_cells(black_box(Coordinate::new(5, 10)))))
    });
}

criterion_group!(
    benches,
    bench_line_clear,
    bench_drop_path,
    bench_rotate_piece,
    bench_flood_fill
);
criterion_main!(benches);
