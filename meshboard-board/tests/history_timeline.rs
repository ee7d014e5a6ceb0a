use meshboard_board::{edge_count, PointHistory, Scene};
use meshboard_core::{BoardStyle, Point, Size};

#[test]
fn history_timeline() {
    let mut board = PointHistory::new();
    let style = BoardStyle::default();
    let surface = Size::new(640.0, 480.0).unwrap();

    for (x, y) in [(10.0, 10.0), (100.0, 40.0), (60.0, 200.0), (300.0, 300.0)] {
        board.place(Point::new(x, y).unwrap());
    }
    let scene = Scene::compose(&board, surface, &style);
    assert_eq!(scene.dots.len(), 4);
    assert_eq!(scene.lines.len(), edge_count(4));

    // step back twice, then forward once
    assert!(board.undo());
    assert!(board.undo());
    assert!(board.redo());
    let scene = Scene::compose(&board, surface, &style);
    assert_eq!(scene.dots.len(), 3);
    assert_eq!(scene.lines.len(), 6);

    // drawing now forks: the one hidden point is gone
    let discarded = board.place(Point::new(5.0, 5.0).unwrap());
    assert_eq!(discarded, 1);
    assert_eq!(board.len(), 4);
    assert!(!board.redo());

    let last = board.visible().last().unwrap();
    assert_eq!(last.at, Point { x: 5.0, y: 5.0 });

    // undo everything, further undo is a no-op
    while board.undo() {}
    assert_eq!(board.steps_back(), 4);
    let scene = Scene::compose(&board, surface, &style);
    assert!(scene.dots.is_empty());
    assert!(scene.lines.is_empty());
    assert_eq!(scene.surface, surface);
}
