use wavsteg::cli::{
	Args, BatchDropPipeline, Command, CreatePipeline, DropPipeline, expand_glob, is_batch_pattern,
};
use wavsteg::show::Show;
use wavsteg::{Config, EmbedOptions};

fn main() {
	let args = Args::parse();
	wavsteg::init(Config { verbose: args.verbose, debug: args.debug });

	let result = match &args.command {
		Command::Create { target, base, output, scale } => {
			let opts = EmbedOptions { base_scale: *scale };
			CreatePipeline::new(target.clone(), base.clone(), output.clone(), opts)
				.run()
				.map(|()| Some((base.clone(), output.clone())))
		}
		Command::Drop { target, output, length } => {
			if is_batch_pattern(target) {
				BatchDropPipeline::new(target.clone(), output.clone(), *length).run().map(|()| None)
			} else {
				DropPipeline::new(target.clone(), output.clone(), *length)
					.run()
					.map(|()| Some((target.clone(), output.clone())))
			}
		}
		Command::Info { target } => {
			expand_glob(target).and_then(|inputs| Show::new(inputs).run()).map(|()| None)
		}
	};

	match result {
		Ok(Some((input, output))) => {
			println!("ok: {} -> {}", input, output);
		}
		Ok(None) => {}
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	}
}
