use crate::cli::core::{parse_row, CommandError, CommandResult, ShellContext};
use crate::cli::formatters::format_amount;
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::core::services::CategoryService;
use crate::domain::Displayable;

const CATEGORY_USAGE: &str = "category [list|add <name> <budget>|delete <row>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "categories",
            "Show categories and their budgets",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new(
            "category",
            "Add, list or delete categories",
            CATEGORY_USAGE,
            cmd_category,
        ),
    ]
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.show_categories()
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(action) = args.first() else {
        return context.show_categories();
    };
    match action.to_lowercase().as_str() {
        "list" | "show" => context.show_categories(),
        "add" => add_category(context, &args[1..]),
        "delete" | "remove" => delete_category(context, &args[1..]),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown category action `{}` (usage: {})",
            other, CATEGORY_USAGE
        ))),
    }
}

fn add_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, budget) = match args {
        [] if context.can_prompt() => {
            let name = io::prompt_text(&context.theme, "Category name")?;
            let budget = io::prompt_amount(&context.theme, "Budget")?;
            (name, budget)
        }
        [name_parts @ .., budget] if !name_parts.is_empty() => {
            (name_parts.join(" "), budget.trim().parse::<f64>().ok())
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: category add <name> <budget>".into(),
            ))
        }
    };
    let Some(budget) = budget else {
        return Err(CommandError::Rejected(
            "Category budget must be a number".into(),
        ));
    };

    let category = CategoryService::add(context.app.storage(), &name, budget)?;
    context.show_categories()?;
    io::print_success(format!(
        "Category `{}` added with budget {}.",
        category.name,
        format_amount(context.currency_symbol(), category.budget)
    ));
    Ok(())
}

fn delete_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let categories = CategoryService::list(context.app.storage())?;
    if categories.is_empty() {
        io::print_info("No categories to delete.");
        return Ok(());
    }

    let index = match args.first() {
        Some(raw) => parse_row(raw, categories.len())?,
        None if context.can_prompt() => {
            let labels: Vec<String> = categories.iter().map(Displayable::display_label).collect();
            match io::select_index(&context.theme, "Delete which category?", &labels)? {
                Some(index) => index,
                None => return Ok(()),
            }
        }
        None => {
            return Err(CommandError::InvalidArguments(
                "usage: category delete <row>".into(),
            ))
        }
    };

    let target = &categories[index];
    CategoryService::delete(context.app.storage(), &target.id)?;
    context.show_categories()?;
    io::print_success(format!("Category `{}` deleted.", target.name));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::{run_lines, test_context};
    use chrono::NaiveDate;

    fn names(context: &ShellContext) -> Vec<String> {
        CategoryService::names(context.app.storage()).unwrap()
    }

    #[test]
    fn multi_word_names_and_deletion_by_row() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let (mut context, _dir) = test_context(today);
        run_lines(
            &mut context,
            &[
                "category add Eating out 80",
                "category add \"Rent\" 900",
                "category add Fuel 60",
                "category delete 2",
            ],
        )
        .unwrap();
        assert_eq!(names(&context), vec!["Eating out", "Fuel"]);
    }

    #[test]
    fn invalid_categories_leave_storage_alone() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let (mut context, _dir) = test_context(today);
        run_lines(
            &mut context,
            &[
                "category add \"  \" 10",
                "category add Food 0",
                "category add Food lots",
                "category add Food",
                "category delete 1",
            ],
        )
        .unwrap();
        assert!(names(&context).is_empty());
    }
}
