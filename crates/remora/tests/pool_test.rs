use std::collections::HashSet;

use remora::message::{Request, Response, SpacersRequest};
use remora::pool::PlacerPool;
use remora::{Alignment, PanelBounds, PlacementOptions, Position};

fn spacers_request(id: &str) -> Request {
    Request::SpacersBounds {
        id: id.to_string(),
        data: SpacersRequest {
            panel: PanelBounds {
                top: 0.0,
                right: 60.0,
                bottom: 20.0,
                left: 0.0,
                offset_x: 10.0,
                offset_y: 10.0,
            },
            options: PlacementOptions::new(Position::Below, Alignment::Center),
        },
    }
}

#[test]
fn pool_always_has_at_least_one_worker() {
    let pool = PlacerPool::new(0);

    assert_eq!(pool.size(), 1);
}

#[test]
fn responses_are_matched_by_id_not_by_order() {
    let pool = PlacerPool::new(3);

    pool.dispatch(spacers_request("a")).unwrap();
    pool.dispatch(spacers_request("b")).unwrap();
    pool.dispatch(spacers_request("c")).unwrap();

    let mut seen = HashSet::new();

    for _ in 0..3 {
        let response = pool.responses().recv().unwrap().unwrap();

        let Response::SpacersBounds { id, data } = response else {
            panic!("wrong response variant");
        };

        assert!(data.before.is_some());
        seen.insert(id);
    }

    // All three correlation ids come back, in whatever order the workers finished.
    assert_eq!(
        seen,
        HashSet::from(["a".to_string(), "b".to_string(), "c".to_string()])
    );
}

#[test]
fn dropping_the_pool_joins_its_workers() {
    let pool = PlacerPool::new(2);
    pool.dispatch(spacers_request("x")).unwrap();

    // The in-flight response is still delivered before shutdown.
    let response = pool.responses().recv().unwrap().unwrap();
    assert_eq!(response.id(), "x");

    drop(pool);
}
