use std::fmt::{Display, Formatter};

use time::format_description::well_known::Rfc3339;

use application::transfer::OrderDto;

use crate::controller::Exhaust;

pub struct OrderLine<'a>(&'a OrderDto);

impl Display for OrderLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let order = self.0;
        let ordered_at = order
            .ordered_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| order.ordered_at.to_string());
        writeln!(f, "{} [{}]", order.order_id, order.status)?;
        writeln!(
            f,
            "    {} {} {} | from {} for {} day(s) | ${:.2}",
            order.car.year,
            order.car.make,
            order.car.model,
            order.start_date,
            order.days,
            order.total_price
        )?;
        write!(
            f,
            "    {} <{}> | ordered {ordered_at}",
            order.customer_name, order.customer_email
        )
    }
}

pub struct OrdersView(Vec<OrderDto>);

impl Display for OrdersView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No orders yet.");
        }
        let lines = self
            .0
            .iter()
            .map(|order| OrderLine(order).to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}

pub struct OrderPresenter;

impl Exhaust<Vec<OrderDto>> for OrderPresenter {
    type To = OrdersView;
    fn emit(&self, input: Vec<OrderDto>) -> Self::To {
        OrdersView(input)
    }
}

impl Exhaust<Option<OrderDto>> for OrderPresenter {
    type To = OrdersView;
    fn emit(&self, input: Option<OrderDto>) -> Self::To {
        OrdersView(input.into_iter().collect())
    }
}
