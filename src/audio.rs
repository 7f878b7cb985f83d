use fnv::FnvHashMap;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::{sound_path, volume_for};

/// One `<audio>` element per sound key, created on first use.
#[derive(Default)]
pub struct SoundBank {
    elements: FnvHashMap<String, web::HtmlAudioElement>,
}

impl SoundBank {
    fn element(&mut self, key: &str, looping: bool) -> Option<&web::HtmlAudioElement> {
        if !self.elements.contains_key(key) {
            match web::HtmlAudioElement::new_with_src(&sound_path(key)) {
                Ok(el) => {
                    el.set_loop(looping);
                    el.set_volume(volume_for(key));
                    el.set_preload("auto");
                    self.elements.insert(key.to_string(), el);
                }
                Err(e) => {
                    log::error!("[audio] cannot create element for {}: {:?}", key, e);
                    return None;
                }
            }
        }
        self.elements.get(key)
    }

    pub fn play(&mut self, key: &str, looping: bool) {
        let Some(el) = self.element(key, looping) else {
            return;
        };
        if !looping {
            el.set_current_time(0.0);
        }
        play_media(el, key);
    }

    pub fn stop(&mut self, key: &str) {
        if let Some(el) = self.elements.get(key) {
            _ = el.pause();
            el.set_current_time(0.0);
        }
    }
}

/// Start playback and log a rejected play promise (autoplay policy etc).
pub fn play_media(el: &web::HtmlMediaElement, label: &str) {
    match el.play() {
        Ok(promise) => {
            let label = label.to_string();
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] play {} rejected: {:?}", label, e);
                }
            });
        }
        Err(e) => log::warn!("[audio] play {} failed: {:?}", label, e),
    }
}
