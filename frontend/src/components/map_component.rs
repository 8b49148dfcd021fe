use driver_logs_lib::geo::{VIEW_MARGIN, padded_bounds};
use driver_logs_lib::geocode::Coordinate;
use futures::join;
use gloo_console::error;
use gloo_utils::document;
use leaflet::{
    Icon, IconOptions, LatLng, LatLngBounds, Map, MapOptions, Marker, MarkerOptions, Point,
    Polyline, PolylineOptions, Popup, PopupOptions, TileLayer, TileLayerOptions,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement, Node, js_sys::Array};
use yew::prelude::*;

use crate::geocode;

const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const ROUTE_COLOR: &str = "#fbc02d";

/// Marker icon assets, passed in explicitly instead of mutating Leaflet's
/// process-wide default icon.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcons {
    pub icon_url: String,
    pub shadow_url: String,
    pub icon_size: (f64, f64),
    pub icon_anchor: (f64, f64),
    pub popup_anchor: (f64, f64),
    pub shadow_size: (f64, f64),
}

impl Default for MarkerIcons {
    fn default() -> Self {
        Self {
            icon_url: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png".to_owned(),
            shadow_url: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png".to_owned(),
            icon_size: (30.0, 45.0),
            icon_anchor: (15.0, 45.0),
            popup_anchor: (0.0, -40.0),
            shadow_size: (45.0, 45.0),
        }
    }
}

impl MarkerIcons {
    fn build(&self) -> Icon {
        let opts = IconOptions::new();
        opts.set_icon_url(self.icon_url.clone());
        opts.set_shadow_url(self.shadow_url.clone());
        opts.set_icon_size(Point::new(self.icon_size.0, self.icon_size.1));
        opts.set_icon_anchor(Point::new(self.icon_anchor.0, self.icon_anchor.1));
        opts.set_popup_anchor(Point::new(self.popup_anchor.0, self.popup_anchor.1));
        opts.set_shadow_size(Point::new(self.shadow_size.0, self.shadow_size.1));
        Icon::new(&opts)
    }
}

/// Map with pickup/dropoff markers and a straight connecting line. Both
/// addresses are geocoded concurrently; if either fails, nothing is drawn.
pub struct MapComponent {
    map: Map,
    container: HtmlElement,
    markers: Vec<Marker>,
    line: Option<Polyline>,
    // Bumped whenever the addresses change, so a late resolution for the
    // previous pair cannot draw over the current one.
    epoch: u64,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub pickup: AttrValue,
    pub dropoff: AttrValue,
    #[prop_or_default]
    pub icons: MarkerIcons,
}

pub enum Msg {
    Resolved {
        epoch: u64,
        coords: Option<(Coordinate, Coordinate)>,
    },
}

impl MapComponent {
    fn render_map(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }

    fn resolve(ctx: &Context<Self>, epoch: u64) {
        let pickup = ctx.props().pickup.to_string();
        let dropoff = ctx.props().dropoff.to_string();
        let cb = ctx
            .link()
            .callback(move |coords| Msg::Resolved { epoch, coords });

        spawn_local(async move {
            let (pickup_coord, dropoff_coord) =
                join!(geocode::forward(&pickup), geocode::forward(&dropoff));

            match (pickup_coord, dropoff_coord) {
                (Ok(p), Ok(d)) => cb.emit(Some((p, d))),
                (p, d) => {
                    error!(format!(
                        "Route endpoints not resolved: pickup {p:?}, dropoff {d:?}"
                    ));
                    cb.emit(None);
                }
            }
        });
    }

    fn clear_layers(&mut self) {
        for marker in self.markers.drain(..) {
            marker.remove();
        }
        if let Some(line) = self.line.take() {
            line.remove();
        }
    }

    fn add_marker(&mut self, coord: Coordinate, label: String, icon: Icon) {
        let opts = MarkerOptions::new();
        opts.set_icon(icon);
        let marker = Marker::new_with_options(&LatLng::new(coord.lat, coord.lon), &opts);

        let popup = Popup::new(&PopupOptions::default(), None);
        popup.set_content(&label.into());
        marker.bind_popup(&popup);

        marker.add_to(&self.map);
        self.markers.push(marker);
    }

    fn draw_route(&mut self, ctx: &Context<Self>, pickup: Coordinate, dropoff: Coordinate) {
        let props = ctx.props();
        self.add_marker(
            pickup,
            format!("Pickup: {}", props.pickup),
            props.icons.build(),
        );
        self.add_marker(
            dropoff,
            format!("Dropoff: {}", props.dropoff),
            props.icons.build(),
        );

        let opts = PolylineOptions::new();
        opts.set_color(ROUTE_COLOR.into());
        opts.set_weight(5.0);
        opts.set_opacity(0.9);
        let points = [pickup, dropoff]
            .into_iter()
            .map(|c| LatLng::new(c.lat, c.lon));
        let line = Polyline::new_with_options(&Array::from_iter(points), &opts);
        line.add_to(&self.map);
        self.line = Some(line);

        let (sw, ne) = padded_bounds(pickup, dropoff, VIEW_MARGIN);
        let bounds = LatLngBounds::new(
            &LatLng::new(sw.lat, sw.lon),
            &LatLng::new(ne.lat, ne.lon),
        );
        self.map.fit_bounds(&bounds);
    }
}

impl Component for MapComponent {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let container: Element = document().create_element("div").unwrap();
        let container: HtmlElement = container.dyn_into().unwrap();
        container.set_class_name("map");

        let map = Map::new_with_element(&container, &MapOptions::default());

        Self::resolve(ctx, 0);

        Self {
            map,
            container,
            markers: Vec::new(),
            line: None,
            epoch: 0,
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.map.set_view(&LatLng::new(0.0, 0.0), 2.0);
            let opts = TileLayerOptions::new();
            opts.set_update_when_idle(true);
            TileLayer::new_options(TILE_URL, &opts).add_to(&self.map);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        self.map.invalidate_size(false);
        let props = ctx.props();

        if props.pickup != old_props.pickup || props.dropoff != old_props.dropoff {
            self.epoch += 1;
            self.clear_layers();
            Self::resolve(ctx, self.epoch);
        }

        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Resolved { epoch, coords } => {
                if epoch != self.epoch {
                    return false;
                }
                self.clear_layers();
                if let Some((pickup, dropoff)) = coords {
                    self.draw_route(ctx, pickup, dropoff);
                }
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="map-frame">
                {self.render_map()}
            </div>
        }
    }
}
