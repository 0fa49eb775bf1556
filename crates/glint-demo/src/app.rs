//! The demo application: eight lit cubes, escape to quit.

use glam::Vec3;

use glint_engine::core::{App, AppControl, FrameCtx};
use glint_engine::input::Key;
use glint_engine::render::phong::{ObjectParams, PhongRenderer, SceneGlobals};
use glint_engine::render::Mesh;

use crate::camera::OrbitCamera;
use crate::geometry::CUBE_VERTICES;
use crate::scene;

const CLEAR_COLOR: [f64; 4] = [0.175, 0.175, 0.175, 1.0];
const LIGHT_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const OBJECT_COLOR: Vec3 = Vec3::new(1.0, 0.5, 0.31);

pub struct DemoApp {
    camera: OrbitCamera,
    renderer: PhongRenderer,
    cube: Option<Mesh>,
}

impl DemoApp {
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::default(),
            renderer: PhongRenderer::new(),
            cube: None,
        }
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        // Close requests take effect here, at the frame boundary.
        if ctx.input.is_down(Key::Escape) {
            log::info!("escape pressed; closing");
            return AppControl::Exit;
        }

        let camera = self.camera;
        let objects: Vec<ObjectParams> = scene::cube_instances()
            .iter()
            .map(|inst| ObjectParams {
                model: inst.model_matrix(),
                light_pos: inst.light_pos,
                shininess: inst.shininess,
            })
            .collect();

        // Geometry is uploaded exactly once, on the first frame.
        let cube = self
            .cube
            .get_or_insert_with(|| Mesh::upload(ctx.gpu.device(), "glint cube", &CUBE_VERTICES));

        let renderer = &mut self.renderer;
        ctx.render(CLEAR_COLOR, |rctx, target| {
            let globals = SceneGlobals {
                view: camera.view(),
                projection: camera.projection(rctx.aspect()),
                view_pos: camera.eye(),
                light_color: LIGHT_COLOR,
                object_color: OBJECT_COLOR,
            };
            renderer.render(rctx, target, cube, &globals, &objects);
        })
    }
}
