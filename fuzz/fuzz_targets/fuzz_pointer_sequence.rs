#![no_main]

use casteljau_viewer::{default_control_points, BezierCurve, CurveConfig};
use glam::Vec2;
use libfuzzer_sys::fuzz_target;

// Jedes Ereignis: 1 Byte Art + 2 Byte Position
fuzz_target!(|data: &[u8]| {
    let Ok(mut curve) = BezierCurve::new(
        &default_control_points(Vec2::new(256.0, 256.0)),
        CurveConfig::default(),
    ) else {
        return;
    };

    for chunk in data.chunks_exact(3) {
        let pos = Vec2::new(chunk[1] as f32, chunk[2] as f32);
        match chunk[0] % 5 {
            0 => {
                curve.pointer_down(pos);
            }
            1 => {
                let _ = curve.pointer_move(pos);
            }
            2 => {
                let _ = curve.pointer_up(pos);
            }
            3 => curve.interpolate(),
            _ => {
                if curve.is_paused() {
                    curve.run();
                } else {
                    curve.pause();
                }
            }
        }

        let dragging = curve
            .control_points()
            .iter()
            .filter(|cp| cp.is_dragging())
            .count();
        assert!(dragging <= 1);
        assert_eq!(curve.any_dragging(), dragging == 1);
        assert!(curve.t() >= 0.0 && curve.t() < 1.0);
    }
});
