use conway::{Cell, Universe, patterns};
use grid_display::{
    Grid, ManualFrameClock, PlaybackController, RasterCanvas, RenderStyle, RenderSurface,
    SimulationEngine, StateView,
};
use test_log::test;

#[test]
fn glider_moves_one_step() {
    let mut input = Universe::new(6, 6).unwrap();
    input.set_cells_alive([(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);

    let mut expected = Universe::new(6, 6).unwrap();
    expected.set_cells_alive([(2, 1), (2, 3), (3, 2), (3, 3), (4, 2)]);

    input.tick();

    assert_eq!(input.cells(), expected.cells());
}

#[test]
fn blinker_has_period_two() {
    let mut universe = Universe::new(5, 5).unwrap();
    universe.init(Some(&patterns::BLINKER)).unwrap();
    let start = universe.cells().to_vec();
    assert_eq!(universe.live_count(), 3);

    universe.tick();
    assert_ne!(universe.cells(), start.as_slice());
    assert_eq!(universe.cell(1, 2), Cell::Alive);
    assert_eq!(universe.cell(3, 2), Cell::Alive);

    universe.tick();
    assert_eq!(universe.cells(), start.as_slice());
}

#[test]
fn still_lifes_do_not_change() {
    for name in ["Block", "Bee hive", "Loaf", "Boat", "Tub"] {
        let mut universe = Universe::new(12, 12).unwrap();
        universe.init(patterns::find(name)).unwrap();
        let start = universe.cells().to_vec();
        universe.tick();
        assert_eq!(universe.cells(), start.as_slice(), "{name} changed");
    }
}

#[test]
fn pulsar_has_period_three() {
    let mut universe = Universe::new(20, 20).unwrap();
    universe.init(patterns::find("Pulsar")).unwrap();
    let start = universe.cells().to_vec();
    for _ in 0..3 {
        universe.tick();
    }
    assert_eq!(universe.cells(), start.as_slice());
}

#[test]
fn step_advances_exactly_one_generation() {
    let grid = Grid::new(5, 5, 5).unwrap();
    let mut canvas = RasterCanvas::new();
    let surface = RenderSurface::initialize(&mut canvas, grid, RenderStyle::default()).unwrap();

    let mut universe = Universe::new(5, 5).unwrap();
    universe.init(Some(&patterns::BLINKER)).unwrap();
    let mut expected = universe.clone();
    expected.tick();

    let mut controller = PlaybackController::new(universe, surface, ManualFrameClock::new());
    controller.step();

    assert!(controller.is_paused());
    assert_eq!(controller.engine().tick_count(), 1);
    assert_eq!(controller.engine().cells(), expected.cells());
    assert_eq!(controller.scheduler().requested(), 0);

    // The surface shows the stepped state.
    let mut reference = RenderSurface::initialize(
        &mut RasterCanvas::new(),
        grid,
        RenderStyle::default(),
    )
    .unwrap();
    reference.render(StateView::binary(0, expected.cells()));
    assert_eq!(controller.surface().context(), reference.context());
}

#[test]
fn clicking_edits_the_universe_while_paused() {
    let grid = Grid::new(3, 3, 5).unwrap();
    let mut canvas = RasterCanvas::new();
    let surface = RenderSurface::initialize(&mut canvas, grid, RenderStyle::default()).unwrap();
    let universe = Universe::new(3, 3).unwrap();
    let mut controller = PlaybackController::new(universe, surface, ManualFrameClock::new());

    let bounds = grid_display::BoundingRect::new(0.0, 0.0, 19.0, 19.0);
    let cell = controller
        .click(grid_display::PointerPosition::new(17.0, 17.0), bounds)
        .unwrap();
    assert_eq!((cell.row, cell.col), (2, 2));
    assert_eq!(controller.engine().cell(2, 2), Cell::Alive);
    assert_eq!(controller.surface().context().pixel(15, 15), Some(grid_display::Rgb::BLACK));
}

#[test]
fn played_universe_stops_on_pause() {
    let grid = Grid::new(8, 8, 2).unwrap();
    let mut canvas = RasterCanvas::new();
    let surface = RenderSurface::initialize(&mut canvas, grid, RenderStyle::default()).unwrap();
    let mut universe = Universe::new(8, 8).unwrap();
    universe.init(patterns::find("Glider")).unwrap();
    let mut controller = PlaybackController::new(universe, surface, ManualFrameClock::new());

    controller.play();
    controller.refresh();
    controller.refresh();
    controller.pause();
    for _ in 0..5 {
        controller.refresh();
    }
    assert_eq!(controller.engine().tick_count(), 3);
}
