//! Google Maps JavaScript SDK behind [`MapSdk`].
//!
//! The SDK is a page-global (`window.google.maps`), so the map and marker
//! handles it hands back are kept in thread-local slots rather than on the
//! (zero-sized) adapter. Browser-only.

use std::cell::RefCell;

use js_sys::{Array, Function, Object, Reflect, encode_uri_component};
use wasm_bindgen::{JsCast, JsValue};

use super::maps::{MapError, MapSdk, sdk_script_src};
use crate::data::sites::{LatLng, Site};

const SCRIPT_ID: &str = "riverwatts-maps-sdk";

thread_local! {
    static MAP: RefCell<Option<JsValue>> = const { RefCell::new(None) };
    static MARKERS: RefCell<Vec<JsValue>> = const { RefCell::new(Vec::new()) };
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GoogleMapsSdk;

fn maps_namespace() -> Result<JsValue, MapError> {
    let window = web_sys::window().ok_or(MapError::SdkMissing)?;
    let google = Reflect::get(&window, &JsValue::from_str("google")).map_err(|_| MapError::SdkMissing)?;
    if google.is_undefined() {
        return Err(MapError::SdkMissing);
    }
    let maps = Reflect::get(&google, &JsValue::from_str("maps")).map_err(|_| MapError::SdkMissing)?;
    if maps.is_undefined() { Err(MapError::SdkMissing) } else { Ok(maps) }
}

fn constructor(maps: &JsValue, name: &str) -> Result<Function, MapError> {
    Reflect::get(maps, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or(MapError::SdkMissing)
}

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}

fn lat_lng(point: LatLng) -> Object {
    let obj = Object::new();
    set(&obj, "lat", &JsValue::from_f64(point.lat));
    set(&obj, "lng", &JsValue::from_f64(point.lng));
    obj
}

impl MapSdk for GoogleMapsSdk {
    fn load_once(&self, api_key: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if document.get_element_by_id(SCRIPT_ID).is_some() {
            return;
        }
        let Ok(script) = document.create_element("script") else {
            return;
        };
        script.set_id(SCRIPT_ID);
        let src = sdk_script_src(api_key, |key| String::from(encode_uri_component(key)));
        let _ = script.set_attribute("src", &src);
        let _ = script.set_attribute("async", "");
        if let Some(head) = document.head() {
            let _ = head.append_child(&script);
        }
    }

    fn is_ready(&self) -> bool {
        maps_namespace().and_then(|maps| constructor(&maps, "Map")).is_ok()
    }

    fn create_map(&self, container_id: &str, center: LatLng, zoom: u8) -> Result<(), MapError> {
        let maps = maps_namespace()?;
        let ctor = constructor(&maps, "Map")?;
        let container = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container_id))
            .ok_or_else(|| MapError::Init(format!("no element #{container_id}")))?;

        let options = Object::new();
        set(&options, "center", &lat_lng(center));
        set(&options, "zoom", &JsValue::from(zoom));

        let map = Reflect::construct(&ctor, &Array::of2(&container, &options))
            .map_err(|e| MapError::Init(format!("{e:?}")))?;
        MAP.with(|slot| *slot.borrow_mut() = Some(map));
        Ok(())
    }

    fn place_marker(&self, site: &Site) -> Result<(), MapError> {
        let map = MAP
            .with(|slot| slot.borrow().clone())
            .ok_or_else(|| MapError::Marker("map not created".to_owned()))?;
        let ctor = constructor(&maps_namespace()?, "Marker")?;

        let options = Object::new();
        set(&options, "position", &lat_lng(site.coordinates));
        set(&options, "map", &map);
        set(&options, "title", &JsValue::from_str(site.name));

        let marker = Reflect::construct(&ctor, &Array::of1(&options))
            .map_err(|e| MapError::Marker(format!("{e:?}")))?;
        MARKERS.with(|m| m.borrow_mut().push(marker));
        Ok(())
    }

    fn remove_all_markers(&self) {
        let markers = MARKERS.with(|m| std::mem::take(&mut *m.borrow_mut()));
        for marker in markers {
            let detach = Reflect::get(&marker, &JsValue::from_str("setMap"))
                .ok()
                .and_then(|f| f.dyn_into::<Function>().ok());
            if let Some(detach) = detach {
                let _ = detach.call1(&marker, &JsValue::NULL);
            }
        }
    }
}
