//! Turbine sites shown on dashboards and the site map.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteStatus {
    Online,
    Maintenance,
    Offline,
}

impl SiteStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Maintenance => "Maintenance",
            Self::Offline => "Offline",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Site {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub coordinates: LatLng,
    pub status: SiteStatus,
    pub capacity_kw: f64,
    pub output_kw: f64,
    /// Customer that owns the installation.
    pub customer_id: &'static str,
}

pub const SITES: &[Site] = &[
    Site {
        id: "rw-001",
        name: "Cedar Rapids Weir",
        location: "Cedar River, IA",
        coordinates: LatLng { lat: 41.9779, lng: -91.6656 },
        status: SiteStatus::Online,
        capacity_kw: 250.0,
        output_kw: 212.4,
        customer_id: "cus-100",
    },
    Site {
        id: "rw-002",
        name: "Willamette Falls Array",
        location: "Oregon City, OR",
        coordinates: LatLng { lat: 45.3515, lng: -122.6184 },
        status: SiteStatus::Online,
        capacity_kw: 600.0,
        output_kw: 547.9,
        customer_id: "cus-101",
    },
    Site {
        id: "rw-003",
        name: "Mississippi Lock 19",
        location: "Keokuk, IA",
        coordinates: LatLng { lat: 40.3961, lng: -91.3746 },
        status: SiteStatus::Maintenance,
        capacity_kw: 900.0,
        output_kw: 0.0,
        customer_id: "cus-100",
    },
    Site {
        id: "rw-004",
        name: "Kvichak Channel",
        location: "Igiugig, AK",
        coordinates: LatLng { lat: 59.3281, lng: -155.8947 },
        status: SiteStatus::Online,
        capacity_kw: 80.0,
        output_kw: 61.2,
        customer_id: "cus-102",
    },
    Site {
        id: "rw-005",
        name: "Roosevelt Island Strait",
        location: "East River, NY",
        coordinates: LatLng { lat: 40.7614, lng: -73.9485 },
        status: SiteStatus::Offline,
        capacity_kw: 1050.0,
        output_kw: 0.0,
        customer_id: "cus-103",
    },
];

pub fn find(id: &str) -> Option<&'static Site> {
    SITES.iter().find(|s| s.id == id)
}

/// Sites owned by `customer_id`, in table order.
pub fn for_customer(customer_id: &str) -> Vec<Site> {
    SITES.iter().filter(|s| s.customer_id == customer_id).copied().collect()
}

pub fn total_output_kw(sites: &[Site]) -> f64 {
    sites.iter().map(|s| s.output_kw).sum()
}

pub fn online_count(sites: &[Site]) -> usize {
    sites.iter().filter(|s| s.status == SiteStatus::Online).count()
}
