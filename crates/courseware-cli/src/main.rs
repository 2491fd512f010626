use clap::{Parser, Subcommand};
use courseware_cli::seeder::{self, SeedConfig};
use courseware_config::DatabaseConfig;
use courseware_db::{PgPool, init_db_pool, run_migrations};
use dialoguer::Confirm;
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "courseware-cli")]
#[command(about = "Courseware CLI - Database seeding tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the database with fake students and courses
    Seed {
        /// Number of students to create
        #[arg(short = 's', long, default_value = "100")]
        students: usize,

        /// Number of courses to create
        #[arg(short = 'c', long, default_value = "30")]
        courses: usize,

        /// Number of students enrolled in each course
        #[arg(long, default_value = "10")]
        per_course: usize,
    },
    /// Seed only students
    SeedStudents {
        /// Number of students to create
        #[arg(short = 's', long, default_value = "100")]
        students: usize,
    },
    /// Seed courses, enrolling existing students
    SeedCourses {
        /// Number of courses to create
        #[arg(short = 'c', long, default_value = "30")]
        courses: usize,

        /// Number of students enrolled in each course
        #[arg(long, default_value = "10")]
        per_course: usize,
    },
    /// Delete all courses, students and enrollments
    ClearSeed {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match connect().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Seed {
            students,
            courses,
            per_course,
        } => {
            let config = SeedConfig {
                students,
                courses,
                students_per_course: per_course,
            };
            seeder::seed_all(&pool, &config).await
        }
        Commands::SeedStudents { students } => seeder::seed_students(&pool, students)
            .await
            .map(|_| ()),
        Commands::SeedCourses {
            courses,
            per_course,
        } => handle_seed_courses(&pool, courses, per_course).await,
        Commands::ClearSeed { yes } => handle_clear_seed(&pool, yes).await,
    };

    if let Err(e) = result {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn connect() -> seeder::SeedResult<PgPool> {
    let config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

async fn handle_seed_courses(
    pool: &PgPool,
    courses: usize,
    per_course: usize,
) -> seeder::SeedResult<()> {
    let student_ids = seeder::existing_student_ids(pool).await?;
    if student_ids.is_empty() && per_course > 0 {
        println!("⚠️  No students found; courses will be created without enrollments");
    }
    seeder::seed_courses(pool, courses, &student_ids, per_course).await?;
    Ok(())
}

async fn handle_clear_seed(pool: &PgPool, yes: bool) -> seeder::SeedResult<()> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt("This deletes ALL courses and students. Continue?")
            .default(false)
            .interact()?;

    if !confirmed {
        println!("Aborted.");
        return Ok(());
    }

    seeder::clear_all(pool).await
}
