use super::records::{Airport, Guest, Supplier};

fn guest(id: &str, name: &str, phone: &str, tour: &str) -> Guest {
    Guest {
        id: id.to_string(),
        name: name.to_string(),
        phone: Some(phone.to_string()),
        tour: Some(tour.to_string()),
    }
}

fn supplier(id: &str, name: &str, service: &str, city: &str) -> Supplier {
    Supplier {
        id: id.to_string(),
        name: name.to_string(),
        service: service.to_string(),
        city: Some(city.to_string()),
    }
}

fn airport(code: &str, name: &str, city: &str, country: &str) -> Airport {
    Airport {
        code: code.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
    }
}

pub(crate) fn guests() -> Vec<Guest> {
    vec![
        guest("G-1001", "Rajesh Kumar", "+91 98100 11001", "Golden Triangle"),
        guest("G-1002", "Rahul Singh", "+91 98100 11002", "Kerala Backwaters"),
        guest("G-1003", "Priya Sharma", "+91 98100 11003", "Golden Triangle"),
        guest("G-1004", "Anjali Mehta", "+91 98100 11004", "Ladakh Explorer"),
        guest("G-1005", "Vikram Patel", "+91 98100 11005", "Goa Getaway"),
        guest("G-1006", "Sneha Reddy", "+91 98100 11006", "Andaman Islands"),
        guest("G-1007", "Arjun Nair", "+91 98100 11007", "Kerala Backwaters"),
        guest("G-1008", "Kavita Iyer", "+91 98100 11008", "Rajasthan Heritage"),
    ]
}

pub(crate) fn suppliers() -> Vec<Supplier> {
    vec![
        supplier("S-201", "Taj Palace Hotels", "Hotel", "New Delhi"),
        supplier("S-202", "Kerala Houseboats Co.", "Houseboat", "Alleppey"),
        supplier("S-203", "Royal Rajasthan Travels", "Coach", "Jaipur"),
        supplier("S-204", "Himalayan Adventures", "Trekking", "Leh"),
        supplier("S-205", "Coastal Cabs", "Transfers", "Panaji"),
        supplier("S-206", "Island Ferries", "Ferry", "Port Blair"),
    ]
}

pub(crate) fn airports() -> Vec<Airport> {
    vec![
        airport("DEL", "Indira Gandhi International", "Delhi", "India"),
        airport("BOM", "Chhatrapati Shivaji Maharaj International", "Mumbai", "India"),
        airport("BLR", "Kempegowda International", "Bengaluru", "India"),
        airport("MAA", "Chennai International", "Chennai", "India"),
        airport("CCU", "Netaji Subhas Chandra Bose International", "Kolkata", "India"),
        airport("HYD", "Rajiv Gandhi International", "Hyderabad", "India"),
        airport("COK", "Cochin International", "Kochi", "India"),
        airport("GOI", "Dabolim", "Goa", "India"),
        airport("GOX", "Manohar International", "Goa", "India"),
        airport("JAI", "Jaipur International", "Jaipur", "India"),
        airport("IXL", "Kushok Bakula Rimpochee", "Leh", "India"),
        airport("IXZ", "Veer Savarkar International", "Port Blair", "India"),
        airport("DXB", "Dubai International", "Dubai", "United Arab Emirates"),
        airport("SIN", "Changi", "Singapore", "Singapore"),
        airport("BKK", "Suvarnabhumi", "Bangkok", "Thailand"),
        airport("LHR", "Heathrow", "London", "United Kingdom"),
        airport("CDG", "Charles de Gaulle", "Paris", "France"),
        airport("ORY", "Orly", "Paris", "France"),
        airport("JFK", "John F. Kennedy International", "New York", "United States"),
        airport("DOH", "Hamad International", "Doha", "Qatar"),
        airport("KTM", "Tribhuvan International", "Kathmandu", "Nepal"),
        airport("CMB", "Bandaranaike International", "Colombo", "Sri Lanka"),
        airport("MLE", "Velana International", "Malé", "Maldives"),
    ]
}
