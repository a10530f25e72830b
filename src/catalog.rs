use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Specification {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CarModel {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: &'static str,
    pub specifications: &'static [Specification],
    pub features: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Dealership {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub opening_hours: &'static str,
}

pub const DEALERSHIP: Dealership = Dealership {
    name: "Sai Motors",
    address: "Hospet Rd, near J K S Hotel, Diwator Nagar, Koppal, Karnataka 583231",
    phone: "+91-9876543210",
    email: "info@saimotors.example.com",
    opening_hours: "Mon - Sat: 9:00 AM - 7:00 PM, Sun: 10:00 AM - 5:00 PM",
};

pub const CAR_MODELS: &[CarModel] = &[
    CarModel {
        id: "swift-dzire",
        name: "Swift Dzire",
        tagline: "Elegance and Performance, Redefined.",
        price: "₹5,50,000",
        specifications: &[
            Specification { label: "Engine", value: "1.0L Petrol" },
            Specification { label: "Mileage", value: "18 kmpl" },
            Specification { label: "Transmission", value: "Automatic (CVT)" },
            Specification { label: "Power", value: "120 PS" },
        ],
        features: &["Sunroof", "Touchscreen Infotainment", "LED Headlamps", "6 Airbags", "Cruise Control"],
    },
    CarModel {
        id: "brezza-suv",
        name: "Brezza SUV",
        tagline: "Adventure Awaits. Conquer Any Terrain.",
        price: "₹8,75,000",
        specifications: &[
            Specification { label: "Engine", value: "2.0L Diesel" },
            Specification { label: "Mileage", value: "20 kmpl" },
            Specification { label: "Transmission", value: "6-Speed Automatic" },
            Specification { label: "Drive Type", value: "AWD" },
        ],
        features: &["Panoramic Sunroof", "360° Camera", "Ventilated Seats", "Hill Descent Control", "Premium Sound System"],
    },
    CarModel {
        id: "polo-gt",
        name: "Volkswagen Polo GT",
        tagline: "Smart, Efficient, and Fun to Drive.",
        price: "₹8,90,000",
        specifications: &[
            Specification { label: "Engine", value: "1.2L Petrol GT" },
            Specification { label: "Mileage", value: "18 kmpl" },
            Specification { label: "Transmission", value: "Manual" },
            Specification { label: "Boot Space", value: "300 Liters" },
        ],
        features: &["Smart Key Entry", "Apple CarPlay & Android Auto", "Rear Parking Sensors", "ABS with EBD", "Dual Front Airbags"],
    },
    CarModel {
        id: "audi-q3",
        name: "Audi Q3",
        tagline: "Space and Comfort for the Whole Family.",
        price: "₹18,20,000",
        specifications: &[
            Specification { label: "Engine", value: "2.0L Petrol" },
            Specification { label: "Mileage", value: "14 kmpl" },
            Specification { label: "Seating", value: "5 Seater" },
            Specification { label: "Airbags", value: "6 Airbags" },
        ],
        features: &["Captain Seats (2nd Row)", "Rear Entertainment System", "Automatic Climate Control", "Powered Tailgate", "ISOFIX Child Seat Mounts"],
    },
];

/// Plain-text summary of the dealership and its line-up, used to prime the
/// answering model.
pub fn knowledge_base() -> String {
    let mut text = format!(
        "{} is a car dealership.\nAddress: {}\nPhone: {}\nEmail: {}\nOpening hours: {}\n\
         Services can be booked by phone, by email, or through the test drive page.\n\nModels:\n",
        DEALERSHIP.name, DEALERSHIP.address, DEALERSHIP.phone, DEALERSHIP.email, DEALERSHIP.opening_hours
    );

    for car in CAR_MODELS {
        let specs = car
            .specifications
            .iter()
            .map(|s| format!("{}: {}", s.label, s.value))
            .collect::<Vec<_>>()
            .join(", ");
        text.push_str(&format!(
            "- {} ({}), {}. {}. Features: {}.\n",
            car.name,
            car.price,
            car.tagline,
            specs,
            car.features.join(", ")
        ));
    }

    text
}
