use iced::widget::svg;
use technifly_ui_sidebar::{Icon, SidebarAssets};

pub(crate) const LOGO: &[u8] = include_bytes!("../assets/svg/logo.svg");
pub(crate) const HOUSE: &[u8] = include_bytes!("../assets/svg/house.svg");
pub(crate) const CHART_LINE: &[u8] =
    include_bytes!("../assets/svg/chart-line.svg");
pub(crate) const CHART_COLUMN: &[u8] =
    include_bytes!("../assets/svg/chart-column.svg");
pub(crate) const WALLET: &[u8] = include_bytes!("../assets/svg/wallet.svg");
pub(crate) const CHART_PIE: &[u8] =
    include_bytes!("../assets/svg/chart-pie.svg");
pub(crate) const ENVELOPE: &[u8] =
    include_bytes!("../assets/svg/envelope.svg");
pub(crate) const SLIDERS: &[u8] = include_bytes!("../assets/svg/sliders.svg");
pub(crate) const PHONE_VOLUME: &[u8] =
    include_bytes!("../assets/svg/phone-volume.svg");
pub(crate) const ANGLE_LEFT: &[u8] =
    include_bytes!("../assets/svg/angle-left.svg");
pub(crate) const ANGLE_RIGHT: &[u8] =
    include_bytes!("../assets/svg/angle-right.svg");

/// SVG glyphs compiled into the binary.
#[derive(Debug, Clone)]
pub(crate) struct BundledAssets {
    logo: svg::Handle,
    house: svg::Handle,
    chart_line: svg::Handle,
    chart_column: svg::Handle,
    wallet: svg::Handle,
    chart_pie: svg::Handle,
    envelope: svg::Handle,
    sliders: svg::Handle,
    phone_volume: svg::Handle,
    angle_left: svg::Handle,
    angle_right: svg::Handle,
}

impl BundledAssets {
    pub(crate) fn new() -> Self {
        Self {
            logo: svg::Handle::from_memory(LOGO),
            house: svg::Handle::from_memory(HOUSE),
            chart_line: svg::Handle::from_memory(CHART_LINE),
            chart_column: svg::Handle::from_memory(CHART_COLUMN),
            wallet: svg::Handle::from_memory(WALLET),
            chart_pie: svg::Handle::from_memory(CHART_PIE),
            envelope: svg::Handle::from_memory(ENVELOPE),
            sliders: svg::Handle::from_memory(SLIDERS),
            phone_volume: svg::Handle::from_memory(PHONE_VOLUME),
            angle_left: svg::Handle::from_memory(ANGLE_LEFT),
            angle_right: svg::Handle::from_memory(ANGLE_RIGHT),
        }
    }
}

impl SidebarAssets for BundledAssets {
    fn icon(&self, icon: Icon) -> svg::Handle {
        let handle = match icon {
            Icon::House => &self.house,
            Icon::ChartLine => &self.chart_line,
            Icon::ChartColumn => &self.chart_column,
            Icon::Wallet => &self.wallet,
            Icon::ChartPie => &self.chart_pie,
            Icon::Envelope => &self.envelope,
            Icon::Sliders => &self.sliders,
            Icon::PhoneVolume => &self.phone_volume,
            Icon::AngleLeft => &self.angle_left,
            Icon::AngleRight => &self.angle_right,
        };
        handle.clone()
    }

    fn logo(&self) -> svg::Handle {
        self.logo.clone()
    }
}
