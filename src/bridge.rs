use wasm_bindgen::prelude::*;
use web_sys as web;

// Rendering side implemented in JS (three.js scene, GLTF meshes, shaders).
// Any object with these methods can be passed to `new Experience(bridge)`.
#[wasm_bindgen]
extern "C" {
    pub type SceneBridge;

    /// `poses` holds twelve floats per id: position, rotation, scale, colour.
    #[wasm_bindgen(method, js_name = setNodePoses)]
    pub fn set_node_poses(this: &SceneBridge, ids: &[u32], poses: &[f32]);

    #[wasm_bindgen(method, js_name = setMonitorUniforms)]
    pub fn set_monitor_uniforms(
        this: &SceneBridge,
        texture_a: u32,
        texture_b: u32,
        mix: f32,
        brightness: f32,
        contrast: f32,
    );

    #[wasm_bindgen(method, js_name = setMeshTexture)]
    pub fn set_mesh_texture(this: &SceneBridge, node: u32, texture: u32);

    #[wasm_bindgen(method, js_name = setBackground)]
    pub fn set_background(this: &SceneBridge, r: f32, g: f32, b: f32);

    #[wasm_bindgen(method, js_name = setTint)]
    pub fn set_tint(this: &SceneBridge, slot: &str, r: f32, g: f32, b: f32);

    #[wasm_bindgen(method, js_name = setSmokeTime)]
    pub fn set_smoke_time(this: &SceneBridge, seconds: f32);

    #[wasm_bindgen(method, js_name = setCameraPose)]
    pub fn set_camera_pose(this: &SceneBridge, pose: &[f32]);

    #[wasm_bindgen(method, js_name = createVideoTexture)]
    pub fn create_video_texture(this: &SceneBridge, video: &web::HtmlVideoElement) -> u32;

    #[wasm_bindgen(method)]
    pub fn render(this: &SceneBridge);
}
