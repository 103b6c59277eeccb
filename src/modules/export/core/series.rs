/// The four exported series, each an hourly arithmetic progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    RestaurantFrequentation,
    CinemaFrequentation,
    FoodSales,
    TicketSales,
}

impl Series {
    pub const ALL: [Series; 4] = [
        Series::RestaurantFrequentation,
        Series::CinemaFrequentation,
        Series::FoodSales,
        Series::TicketSales,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Series::RestaurantFrequentation => "frequentation_restaurant",
            Series::CinemaFrequentation => "frequentation_cinema",
            Series::FoodSales => "ventes_food",
            Series::TicketSales => "ventes_ticket",
        }
    }

    /// `(base, step)`: hour `j` of a bucket contributes `base + j * step`.
    fn progression(self) -> (u64, u64) {
        match self {
            Series::RestaurantFrequentation => (15, 2),
            Series::CinemaFrequentation => (25, 3),
            Series::FoodSales => (50, 5),
            Series::TicketSales => (100, 10),
        }
    }

    /// Sum of the first `hours` terms: `h*base + step*h*(h-1)/2`.
    pub fn aggregate(self, hours: u32) -> u64 {
        let (base, step) = self.progression();
        let h = u64::from(hours);
        h * base + step * h * h.saturating_sub(1) / 2
    }
}
