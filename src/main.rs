use kanto_clash::{
    get_prefab_teams, get_valid_actions, players_to_act, BattleEvent, BattlePlayer, BattleRunner,
    BattleState, GameState, PlayerAction, PrefabTeam, TurnRng, TEAM_SIZE,
};
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

struct CliOptions {
    teams_path: Option<String>,
    transcript_path: Option<String>,
}

fn print_usage() {
    println!("Usage: kanto-clash [--teams <file.ron>] [--transcript <file.json>]");
    println!();
    println!("  --teams <file.ron>        Load a custom team definition; both players use it.");
    println!("  --transcript <file.json>  Write the full battle event log as JSON on exit.");
}

fn parse_args() -> CliOptions {
    let mut options = CliOptions {
        teams_path: None,
        transcript_path: None,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--teams" => options.teams_path = args.next(),
            "--transcript" => options.transcript_path = args.next(),
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(2);
            }
        }
    }

    options
}

fn load_team(options: &CliOptions) -> PrefabTeam {
    match &options.teams_path {
        Some(path) => {
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    eprintln!("Error reading team file {}: {}", path, err);
                    process::exit(1);
                }
            };
            match PrefabTeam::from_ron(&text) {
                Ok(team) => team,
                Err(err) => {
                    eprintln!("Error parsing team file {}: {}", path, err);
                    process::exit(1);
                }
            }
        }
        None => get_prefab_teams()
            .into_iter()
            .next()
            .expect("a prefab team is always defined"),
    }
}

/// Read one number in [min, max] from the console, re-prompting until the
/// input parses and lands in range. The engine never sees anything else.
fn read_selection(input: &mut impl BufRead, prompt: &str, min: usize, max: usize) -> usize {
    loop {
        print!("{} ", prompt);
        io::stdout().flush().expect("stdout is writable");

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                eprintln!("Input closed, aborting battle.");
                process::exit(1);
            }
            Ok(_) => {}
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                process::exit(1);
            }
        }

        match line.trim().parse::<usize>() {
            Ok(value) if (min..=max).contains(&value) => return value,
            _ => println!("Please enter a number between {} and {}.", min, max),
        }
    }
}

fn choose_starting_pokemon(input: &mut impl BufRead, player: &mut BattlePlayer) {
    println!(
        "\n{}, choose your starting Pokemon (1-{}):",
        player.player_name, TEAM_SIZE
    );
    for (index, pokemon) in player.team.iter().enumerate() {
        println!("{}) {} (HP {})", index + 1, pokemon.name, pokemon.max_hp());
    }

    let choice = read_selection(input, ">", 1, TEAM_SIZE);
    player
        .switch_pokemon(choice - 1)
        .expect("every combatant is alive at battle start");
}

fn print_status(state: &BattleState) {
    println!("\n--- Status ---");
    for player in &state.players {
        let pokemon = player.active_pokemon();
        println!(
            "{} active: {} - HP: {}/{}",
            player.player_name,
            pokemon.name,
            pokemon.current_hp(),
            pokemon.max_hp()
        );
    }
    println!("--------------");
}

fn prompt_replacement(
    input: &mut impl BufRead,
    state: &BattleState,
    player_index: usize,
    valid_actions: &[PlayerAction],
) -> PlayerAction {
    let player = &state.players[player_index];
    println!(
        "\n{}, choose a new Pokemon (1-{}):",
        player.player_name, TEAM_SIZE
    );
    for (index, pokemon) in player.team.iter().enumerate() {
        if !pokemon.is_fainted() {
            println!(
                "{}) {} (HP {})",
                index + 1,
                pokemon.name,
                pokemon.current_hp()
            );
        }
    }

    loop {
        let choice = read_selection(input, ">", 1, TEAM_SIZE);
        let action = PlayerAction::SwitchPokemon {
            team_index: choice - 1,
        };
        if valid_actions.contains(&action) {
            return action;
        }
        println!("That Pokemon cannot battle.");
    }
}

fn prompt_turn_action(
    input: &mut impl BufRead,
    state: &BattleState,
    player_index: usize,
    valid_actions: &[PlayerAction],
) -> PlayerAction {
    let player = &state.players[player_index];
    let pokemon = player.active_pokemon();

    println!("\n{}'s turn ({})", player.player_name, pokemon.name);
    for (index, move_) in pokemon.moves.iter().enumerate() {
        println!(
            "{}) {} (Power {})",
            index + 1,
            move_.name(),
            move_.data().power
        );
    }
    println!("5) Switch Pokemon");

    loop {
        let choice = read_selection(input, ">", 1, 5);
        if choice <= 4 {
            return PlayerAction::UseMove {
                move_index: choice - 1,
            };
        }

        let can_switch = valid_actions
            .iter()
            .any(|action| matches!(action, PlayerAction::SwitchPokemon { .. }));
        if !can_switch {
            println!("No other Pokemon can battle!");
            continue;
        }

        println!("Switch to which Pokemon (1-{})?", TEAM_SIZE);
        for (index, teammate) in player.team.iter().enumerate() {
            let note = if teammate.is_fainted() { " (KO)" } else { "" };
            println!("{}) {}{}", index + 1, teammate.name, note);
        }
        loop {
            let target = read_selection(input, ">", 1, TEAM_SIZE);
            let action = PlayerAction::SwitchPokemon {
                team_index: target - 1,
            };
            if valid_actions.contains(&action) {
                return action;
            }
            println!("That Pokemon cannot battle.");
        }
    }
}

fn prompt_action(
    input: &mut impl BufRead,
    state: &BattleState,
    player_index: usize,
) -> PlayerAction {
    let valid_actions = get_valid_actions(state, player_index);
    let is_replacement = matches!(
        state.game_state,
        GameState::WaitingForPlayer1Replacement
            | GameState::WaitingForPlayer2Replacement
            | GameState::WaitingForBothReplacements
    );

    if is_replacement {
        prompt_replacement(input, state, player_index, &valid_actions)
    } else {
        prompt_turn_action(input, state, player_index, &valid_actions)
    }
}

fn write_transcript(path: &str, events: &[BattleEvent]) {
    match serde_json::to_string_pretty(events) {
        Ok(json) => {
            if let Err(err) = fs::write(path, json) {
                eprintln!("Error writing transcript {}: {}", path, err);
            } else {
                println!("Transcript written to {}", path);
            }
        }
        Err(err) => eprintln!("Error serializing transcript: {}", err),
    }
}

fn main() {
    let options = parse_args();
    let prefab = load_team(&options);

    let build = |id: &str, name: &str| match prefab.build_player(id, name) {
        Ok(player) => player,
        Err(err) => {
            eprintln!("Error building team: {}", err);
            process::exit(1);
        }
    };
    let mut player1 = build("p1", "Player 1");
    let mut player2 = build("p2", "Player 2");

    println!("=== Kanto Clash - {} ===", prefab.name);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    choose_starting_pokemon(&mut input, &mut player1);
    choose_starting_pokemon(&mut input, &mut player2);

    let mut runner = BattleRunner::new("console".to_string(), player1, player2);
    let mut transcript: Vec<BattleEvent> = Vec::new();

    while !runner.is_battle_ended() {
        if runner.state().game_state == GameState::WaitingForActions {
            print_status(runner.state());
        }

        for player_index in players_to_act(runner.state()) {
            if runner.state().action_queue[player_index].is_some() {
                continue;
            }
            let action = prompt_action(&mut input, runner.state(), player_index);
            runner
                .submit_action(player_index, action)
                .expect("console selections are validated before submission");
        }

        let bus = runner
            .resolve(TurnRng::new_random())
            .expect("every pending action was submitted");
        println!();
        bus.print_formatted(runner.state());
        transcript.extend(bus.events().iter().cloned());
    }

    let winner = runner.winner().expect("the battle just ended");
    println!(
        "\n== {} won the battle! ==",
        runner.state().players[winner].player_name
    );

    if let Some(path) = &options.transcript_path {
        write_transcript(path, &transcript);
    }
}
