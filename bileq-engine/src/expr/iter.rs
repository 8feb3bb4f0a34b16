use super::Expr;

/// An iterator that traverses the tree of expressions in left-to-right post-order (i.e.
/// depth-first, children before parents).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    /// Pending nodes, paired with whether their children have already been scheduled.
    stack: Vec<(&'a Expr, bool)>,
}

impl<'a> ExprIter<'a> {
    pub(crate) fn new(expr: &'a Expr) -> Self {
        Self { stack: vec![(expr, false)] }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((expr, children_scheduled)) = self.stack.pop() {
            if children_scheduled {
                return Some(expr);
            }

            self.stack.push((expr, true));
            match expr {
                Expr::Primary(_) => {},
                Expr::Add(children) | Expr::Mul(children) => {
                    for child in children.iter().rev() {
                        self.stack.push((child, false));
                    }
                },
                Expr::Exp(base, exp) => {
                    self.stack.push((exp, false));
                    self.stack.push((base, false));
                },
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{integer, power, product, sum};
    use super::*;

    #[test]
    fn post_order_visits_children_first() {
        // (2 + 3) * 4^5
        let expr = product(vec![
            sum(vec![integer(2), integer(3)]),
            power(integer(4), integer(5)),
        ]);

        let order = expr.post_order_iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>();
        assert_eq!(order, ["2", "3", "2 + 3", "4", "5", "4^5", "(2 + 3) * 4^5"]);
    }

    #[test]
    fn node_count_includes_every_node() {
        let expr = sum(vec![integer(1), integer(2), integer(3)]);
        assert_eq!(expr.post_order_iter().count(), 4);
    }
}
