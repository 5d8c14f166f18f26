//! Integration tests for the init / pre-frame / post-frame contract and the
//! orientation guard.

use pretty_assertions::assert_eq;
use strive_core::{
    BasisMatrix, BasisTracker, ColorMode, CoordinateMode, Dimensionality, Point, Surface,
    TransformError,
};
use strive_render::{DrawCall, FramePhase, RecordingRenderer, Renderer, TrackedRenderer};

fn tracked(renderer: RecordingRenderer) -> TrackedRenderer<RecordingRenderer> {
    let mut t = TrackedRenderer::new(renderer);
    t.init();
    t.inner_mut().take_calls();
    t
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

// ─── Phases ─────────────────────────────────────────────────────────────

#[test]
fn pre_frame_before_init_is_rejected() {
    let mut t = TrackedRenderer::new(RecordingRenderer::planar(100.0, 100.0));
    assert_eq!(
        t.pre_frame(),
        Err(TransformError::FrameOrder {
            operation: "pre_frame"
        })
    );
    assert_eq!(t.phase(), FramePhase::Uninitialized);
}

#[test]
fn phases_advance_through_a_frame() {
    let mut t = tracked(RecordingRenderer::planar(100.0, 100.0));
    assert_eq!(t.phase(), FramePhase::Ready);
    t.pre_frame().unwrap();
    assert_eq!(t.phase(), FramePhase::Drawing);
    t.post_frame();
    assert_eq!(t.phase(), FramePhase::Ready);
}

#[test]
fn init_is_idempotent() {
    let mut t = tracked(RecordingRenderer::planar(100.0, 100.0));
    t.init();
    assert!(t.inner().calls().is_empty());
}

// ─── Ambient flip ───────────────────────────────────────────────────────

#[test]
fn right_hand_planar_flips_and_moves_origin() {
    let mut t = tracked(RecordingRenderer::planar(400.0, 300.0));
    t.pre_frame().unwrap();

    assert_eq!(
        t.inner().calls(),
        &[
            DrawCall::Scale {
                sx: 1.0,
                sy: -1.0,
                sz: 1.0
            },
            DrawCall::Translate {
                dx: 0.0,
                dy: -300.0,
                dz: None
            },
        ]
    );
    assert!(t.is_flipped());
    let origin = t.forward(Point::ORIGIN);
    assert!(close(origin.to_point(), Point::new(0.0, 300.0)), "{origin:?}");
}

#[test]
fn left_hand_leaves_the_basis_alone() {
    let mut t = tracked(RecordingRenderer::planar(400.0, 300.0));
    t.set_coordinate_mode(CoordinateMode::LeftHand);
    t.pre_frame().unwrap();

    assert!(t.inner().calls().is_empty());
    assert!(t.current_matrix().is_identity());
    assert!(!t.is_flipped());
}

#[test]
fn right_hand_spatial_flips_and_refreshes_camera() {
    let mut t = tracked(RecordingRenderer::spatial(400.0, 300.0));
    t.pre_frame().unwrap();

    assert_eq!(
        t.inner().calls(),
        &[
            DrawCall::Scale {
                sx: 1.0,
                sy: -1.0,
                sz: 1.0
            },
            DrawCall::RefreshCamera,
        ]
    );
    assert_eq!(t.current_matrix().y_scale(), -1.0);
}

#[test]
fn pre_frame_flip_matches_the_bare_tracker() {
    for renderer in [
        RecordingRenderer::planar(320.0, 180.0),
        RecordingRenderer::spatial(320.0, 180.0),
    ] {
        for mode in [CoordinateMode::RightHand, CoordinateMode::LeftHand] {
            let surface = renderer.surface();
            let mut bare = BasisTracker::new(surface.dimensionality);
            bare.apply_ambient_flip(mode, surface.height).unwrap();

            let mut t = TrackedRenderer::new(renderer.clone());
            t.set_coordinate_mode(mode);
            t.init();
            t.pre_frame().unwrap();
            assert_eq!(t.current_matrix(), bare.current(), "{mode:?}");
        }
    }
}

#[test]
fn unknown_mode_name_keeps_previous_mode() {
    let mut t = tracked(RecordingRenderer::planar(100.0, 100.0));
    t.set_coordinate_mode_str("left-hand");
    t.set_coordinate_mode_str("sideways");
    assert_eq!(t.coordinate_mode(), CoordinateMode::LeftHand);
}

// ─── Isolation ──────────────────────────────────────────────────────────

#[test]
fn unbalanced_pushes_do_not_leak_into_next_frame() {
    let mut t = tracked(RecordingRenderer::planar(400.0, 300.0));

    t.frame(|ctx| {
        ctx.push();
        ctx.apply_translate(40.0, 40.0, None)?;
        ctx.push();
        ctx.set_color_mode(ColorMode::Hsl);
        ctx.apply_rotate(45.0, None)?;
        ctx.push();
        ctx.apply_scale(3.0)
    })
    .unwrap();

    assert_eq!(
        *t.current_matrix(),
        BasisMatrix::identity(Dimensionality::Planar)
    );
    assert_eq!(t.stack_depth(), 0);
    assert_eq!(t.inner().native_depth(), 0);
    assert_eq!(t.color_mode(), ColorMode::Rgb);
    let renderer_mode = t.inner().calls().iter().rev().find_map(|call| match call {
        DrawCall::ColorMode(mode) => Some(*mode),
        _ => None,
    });
    assert_eq!(renderer_mode, Some(ColorMode::Rgb));

    t.pre_frame().unwrap();
    assert!(t.inner().native_matches(t.current_matrix(), 1e-12));
}

#[test]
fn post_frame_runs_when_draw_fails() {
    let mut t = tracked(RecordingRenderer::planar(100.0, 100.0));
    let result = t.frame(|ctx| {
        ctx.apply_translate(5.0, 5.0, None)?;
        ctx.apply_translate(1.0, 1.0, Some(1.0))
    });

    assert!(matches!(result, Err(TransformError::RequiresSpatial { .. })));
    assert!(t.current_matrix().is_identity());
    assert_eq!(t.phase(), FramePhase::Ready);
}

#[test]
fn post_frame_follows_surface_switch() {
    let mut t = tracked(RecordingRenderer::planar(100.0, 100.0));
    t.pre_frame().unwrap();
    t.inner_mut().set_surface(Surface::spatial(100.0, 100.0));
    t.post_frame();

    assert_eq!(
        *t.current_matrix(),
        BasisMatrix::identity(Dimensionality::Spatial)
    );
}

// ─── Orientation ────────────────────────────────────────────────────────

#[test]
fn text_is_plain_when_not_flipped() {
    let mut t = tracked(RecordingRenderer::planar(400.0, 300.0));
    t.set_coordinate_mode(CoordinateMode::LeftHand);
    t.pre_frame().unwrap();
    t.responsive_text("A", 10.0, 10.0);

    assert_eq!(
        t.inner().calls(),
        &[DrawCall::Text {
            value: "A".into(),
            x: 10.0,
            y: 10.0,
            device: Point::new(10.0, 10.0),
            upright: true,
        }]
    );
}

#[test]
fn flipped_text_lands_where_the_point_does_and_stays_upright() {
    let mut t = tracked(RecordingRenderer::planar(400.0, 300.0));
    t.set_coordinate_mode(CoordinateMode::LeftHand);
    t.pre_frame().unwrap();
    t.apply_scale((1.0, -1.0)).unwrap();
    assert!(t.is_flipped());

    let before = *t.current_matrix();
    let expected = t.forward(Point::new(10.0, 10.0));
    t.responsive_text("A", 10.0, 10.0);

    let (value, device, upright) = t.inner().texts().next().unwrap();
    assert_eq!(value, "A");
    assert!(close(device, expected.to_point()), "{device:?}");
    assert!(upright);
    assert_eq!(*t.current_matrix(), before);
    assert_eq!(t.stack_depth(), 0);
    assert_eq!(t.inner().native_depth(), 0);
}

#[test]
fn right_hand_text_is_upright() {
    let mut t = tracked(RecordingRenderer::planar(400.0, 300.0));
    t.pre_frame().unwrap();
    t.responsive_text("label", 10.0, 10.0);

    let (_, device, upright) = t.inner().texts().next().unwrap();
    assert!(close(device, Point::new(10.0, 290.0)), "{device:?}");
    assert!(upright);
}
