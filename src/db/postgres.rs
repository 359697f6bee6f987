use crate::config::Config;
use crate::db::models::{NewOrder, Order, OrderCreated};
use crate::db::schema::PG_INIT;
use crate::error::OrdexError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type PgPool = Pool<Postgres>;

/// Fixed page size for the read path.
const LIST_LIMIT: i64 = 20;

/// Order storage split across two connection targets: every write goes to
/// the primary, every read to the replica. Each query checks a connection
/// out of its pool for the duration of the statement and returns it on all
/// exit paths, so no handle outlives a request.
#[derive(Clone)]
pub struct OrderStore {
    primary: PgPool,
    replica: PgPool,
}

impl OrderStore {
    /// Build both pools from the configuration. Connections are established
    /// lazily so callers control when the database is first touched.
    pub fn connect(cfg: &Config) -> Result<Self, OrdexError> {
        let primary = PgPoolOptions::new()
            .max_connections(cfg.max_connections)
            .connect_lazy(&cfg.primary_url())?;
        let replica = PgPoolOptions::new()
            .max_connections(cfg.max_connections)
            .connect_lazy(&cfg.replica_url())?;
        Ok(Self { primary, replica })
    }

    pub fn primary(&self) -> &PgPool {
        &self.primary
    }

    pub fn replica(&self) -> &PgPool {
        &self.replica
    }

    /// Initialize the schema on the primary by executing the bundled DDL.
    /// Safe to call more than once.
    pub async fn init_schema(&self) -> Result<(), OrdexError> {
        // sqlx::query takes one statement at a time; split the DDL like the
        // bundled schema expects.
        for stmt in PG_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.primary).await?;
        }
        Ok(())
    }

    /// Insert one order on the primary, returning the generated id and
    /// database-assigned timestamp.
    pub async fn insert_order(&self, order: &NewOrder) -> Result<OrderCreated, OrdexError> {
        let created = sqlx::query_as::<_, OrderCreated>(
            r#"
            INSERT INTO orders (customer_id, total_amount, status, payment_method)
            VALUES ($1, $2, $3, $4)
            RETURNING order_id, created_at
            "#,
        )
        .bind(order.customer_id)
        .bind(order.total_amount)
        .bind(&order.status)
        .bind(&order.payment_method)
        .fetch_one(&self.primary)
        .await?;
        Ok(created)
    }

    /// Most recent orders from the replica, newest first. The replica may
    /// lag the primary; nothing here compensates for that.
    pub async fn list_recent(&self) -> Result<Vec<Order>, OrdexError> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT order_id, customer_id, total_amount, status, payment_method, created_at
            FROM orders
            ORDER BY order_id DESC
            LIMIT $1
            "#,
        )
        .bind(LIST_LIMIT)
        .fetch_all(&self.replica)
        .await?;
        Ok(orders)
    }
}
